pub fn run(query: &str) -> Result<(), String> {
    let table = super::load_table()?;
    let results = table.query().text(query).execute();
    super::print_grid(&results);
    Ok(())
}
