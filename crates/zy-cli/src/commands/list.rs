use zy_core::Auspice;

pub fn run(auspice: Option<&str>) -> Result<(), String> {
    let table = super::load_table()?;

    let mut query = table.query();
    if let Some(rank_str) = auspice {
        let rank = Auspice::parse(rank_str).ok_or_else(|| {
            format!("unknown auspice rank: \"{rank_str}\" (try supreme, favorable, neutral, unfavorable, dire)")
        })?;
        query = query.auspice(rank);
    }

    let results = query.execute();
    super::print_grid(&results);

    Ok(())
}
