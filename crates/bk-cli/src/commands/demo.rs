use bk_core::EntityBuilder;

pub fn run() -> Result<(), String> {
    EntityBuilder::new()
        .add_property_a("Prop A")
        .add_property_b("Prop B")
        .build()
        .process();
    Ok(())
}
