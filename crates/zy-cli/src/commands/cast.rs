use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use zy_divination::Session;

pub fn run(seed: Option<u64>, interpret: bool) -> Result<(), String> {
    let table = super::load_table()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("  {}", "Casting the lines...".bold());
    if let Some(seed) = seed {
        println!("  {}", format!("(seed={seed})").dimmed());
    }
    println!();

    let mut session = Session::new();
    while !session.is_complete() {
        let toss = session.toss(&mut rng).map_err(|e| e.to_string())?;
        let faces: Vec<String> = toss.coins.iter().map(ToString::to_string).collect();
        println!(
            "  Line {}: {}  {}  -> {}",
            session.len(),
            faces.join(" "),
            toss,
            toss.line()
        );
    }
    println!();

    let hexagram = session.resolve(&table).map_err(|e| e.to_string())?;
    println!("  {}", "The hexagram is formed.".italic());
    println!();
    super::print_hexagram(hexagram);

    if interpret {
        println!();
        super::interpret::stream_to_stdout(hexagram)?;
    }

    Ok(())
}
