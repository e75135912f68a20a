use std::collections::BTreeMap;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Oxide label map
// ---------------------------------------------------------------------------

/// Pretty axis labels for common oxide columns. egui renders plain text, so
/// the sub/superscripts are Unicode rather than LaTeX. Built once, read-only
/// for the lifetime of the process.
static COLUMN_LABEL_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("SiO2", "SiO₂ (wt.%)"),
        ("TiO2", "TiO₂ (wt.%)"),
        ("Al2O3", "Al₂O₃ (wt.%)"),
        ("FeO", "FeO (wt.%)"),
        ("Fe2O3", "Fe₂O₃ (wt.%)"),
        ("FeO*", "FeO* (wt.%)"),
        ("MnO", "MnO (wt.%)"),
        ("MgO", "MgO (wt.%)"),
        ("CaO", "CaO (wt.%)"),
        ("Na2O", "Na₂O (wt.%)"),
        ("K2O", "K₂O (wt.%)"),
        ("P2O5", "P₂O₅ (wt.%)"),
        ("Na2O+K2O", "Na₂O + K₂O (wt.%)"),
        ("Mg#", "Mg#"),
    ])
});

/// Map a column name to a human-readable axis label.
///
/// Known oxide columns get their mapped label verbatim; anything else is
/// returned with underscores replaced by spaces.
pub fn get_pretty_label(column_name: &str) -> String {
    if let Some(label) = COLUMN_LABEL_MAP.get(column_name) {
        return (*label).to_string();
    }
    column_name.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_oxides_use_mapped_labels() {
        for (name, label) in COLUMN_LABEL_MAP.iter() {
            assert_eq!(get_pretty_label(name), *label);
        }
        assert_eq!(get_pretty_label("SiO2"), "SiO₂ (wt.%)");
        assert_eq!(get_pretty_label("Mg#"), "Mg#");
    }

    #[test]
    fn unknown_names_replace_underscores() {
        assert_eq!(get_pretty_label("rock_type"), "rock type");
        assert_eq!(get_pretty_label("Sr_ppm"), "Sr ppm");
        assert_eq!(get_pretty_label("Depth"), "Depth");
    }

    #[test]
    fn fallback_is_idempotent() {
        let once = get_pretty_label("sample_site_name");
        let twice = get_pretty_label(&once);
        assert_eq!(once, twice);
    }
}
