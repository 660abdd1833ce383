//! CLI command to show how a market hash name decomposes.

use clap::Args;

use skinscan_comparison::ItemIdentifier;

/// Arguments for the parse command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Market hash name, e.g. "StatTrak™ AK-47 | Redline (Field-Tested)".
    pub identifier: String,
}

pub fn run_parse(args: &ParseArgs) {
    let id = ItemIdentifier::parse(&args.identifier);
    for (label, value) in describe(&id) {
        println!("{label:<12} {value}");
    }
}

fn describe(id: &ItemIdentifier) -> Vec<(&'static str, String)> {
    vec![
        ("Base name:", id.base_name.clone()),
        (
            "Wear:",
            id.wear.map_or_else(|| "-".to_string(), |w| w.to_string()),
        ),
        ("StatTrak:", id.is_stattrak.to_string()),
        ("Souvenir:", id.is_souvenir.to_string()),
        (
            "Recomposed:",
            id.recompose().unwrap_or_else(|| "-".to_string()),
        ),
        ("Clean:", id.is_clean().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_describe_stattrak_item() {
        let id = ItemIdentifier::parse("StatTrak™ AK-47 | Redline (Field-Tested)");
        let rows = describe(&id);

        assert_eq!(value(&rows, "Base name:"), "AK-47 | Redline");
        assert_eq!(value(&rows, "Wear:"), "Field-Tested");
        assert_eq!(value(&rows, "StatTrak:"), "true");
        assert_eq!(value(&rows, "Clean:"), "true");
    }

    #[test]
    fn test_describe_souvenir_has_no_recomposition() {
        let id = ItemIdentifier::parse("Souvenir AWP | Dragon Lore (Factory New)");
        let rows = describe(&id);

        assert_eq!(value(&rows, "Souvenir:"), "true");
        assert_eq!(value(&rows, "Recomposed:"), "-");
        assert_eq!(value(&rows, "Clean:"), "false");
    }
}
