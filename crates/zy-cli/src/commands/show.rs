pub fn run(reference: &str) -> Result<(), String> {
    let table = super::load_table()?;
    let hexagram = super::find_hexagram(&table, reference)?;
    super::print_hexagram(hexagram);
    Ok(())
}
