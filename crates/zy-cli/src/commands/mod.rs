pub mod cast;
pub mod interpret;
pub mod list;
pub mod search;
pub mod show;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use zy_core::{Auspice, Hexagram, HexagramTable, Line};

/// Build the reference table. A failure here means the embedded data is
/// corrupt; it is reported, never worked around.
pub fn load_table() -> Result<HexagramTable, String> {
    HexagramTable::new().map_err(|e| format!("reference table corrupt: {e}"))
}

/// Resolve a user-supplied reference or fail with a usable message.
pub fn find_hexagram<'t>(
    table: &'t HexagramTable,
    reference: &str,
) -> Result<&'t Hexagram, String> {
    table
        .find(reference)
        .ok_or_else(|| format!("hexagram not found: \"{reference}\""))
}

/// Render the six-line figure. Data is bottom-to-top; the figure prints
/// top line first.
pub fn render_figure(pattern: &[Line; 6]) -> String {
    pattern
        .iter()
        .rev()
        .map(|line| {
            if line.is_yang() {
                "━━━━━━━━━"
            } else {
                "━━━━ ━━━━"
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Auspice badge with the grid's color coding.
pub fn auspice_badge(auspice: Auspice) -> colored::ColoredString {
    let label = auspice.label();
    match auspice {
        Auspice::Supreme => label.red().bold(),
        Auspice::Favorable => label.yellow().bold(),
        Auspice::Neutral => label.blue(),
        Auspice::Unfavorable => label.bright_black(),
        Auspice::Dire => label.bright_black().bold(),
    }
}

/// Print a result set as a table with a count footer.
pub fn print_grid(results: &[&Hexagram]) {
    if results.is_empty() {
        println!("  No hexagrams found.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Pinyin", "English", "Auspice", "Composition"]);

    for hexagram in results {
        table.add_row(vec![
            hexagram.id.to_string(),
            hexagram.name.to_string(),
            hexagram.pinyin.to_string(),
            hexagram.english.to_string(),
            hexagram.auspice.label().to_string(),
            hexagram.nature(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", results.len());
}

/// Print one hexagram in full: identity, figure, trigram composition.
pub fn print_hexagram(hexagram: &Hexagram) {
    println!(
        "  {} {}",
        hexagram.name.bold(),
        format!("#{}", hexagram.id).dimmed()
    );
    println!("  {} — {}", hexagram.pinyin, hexagram.english);
    println!(
        "  {} {}",
        auspice_badge(hexagram.auspice),
        hexagram.auspice.english().dimmed()
    );
    println!();

    for row in render_figure(&hexagram.pattern).lines() {
        println!("    {row}");
    }
    println!();

    let upper = hexagram.upper_trigram();
    let lower = hexagram.lower_trigram();
    println!(
        "  upper: {} {} {}",
        upper.name(),
        upper.element(),
        format!("({})", upper.english()).dimmed()
    );
    println!(
        "  lower: {} {} {}",
        lower.name(),
        lower.element(),
        format!("({})", lower.english()).dimmed()
    );
    println!("  {}", hexagram.nature().italic());
}
