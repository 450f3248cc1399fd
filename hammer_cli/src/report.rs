//! Plain-text rendering of a fight report

use hammer_core::combat::{AttackResult, FightReport, SaveUsed};

/// Render a report as one line per weapon plus a total
pub fn render_text(report: &FightReport) -> String {
    let mut out = format!("{} is attacking {}.\n", report.attacker, report.target);

    if report.attacks.is_empty() {
        out.push_str(&format!("No {} weapons.\n", report.phase));
        return out;
    }

    let width = report
        .attacks
        .iter()
        .map(|a| a.weapon.len())
        .max()
        .unwrap_or(0);

    for attack in &report.attacks {
        out.push_str(&format!("  {}\n", attack_line(attack, width)));
    }
    out.push_str(&format!(
        "Total: {:.3} expected damage ({})\n",
        report.total_expected_damage(),
        report.phase
    ));
    out
}

fn attack_line(attack: &AttackResult, width: usize) -> String {
    let b = &attack.breakdown;
    format!(
        "{:<width$}  {:>7.3}  (hits {:.2}, wounds {:.2} on {}+, unsaved {:.2} vs {})",
        attack.weapon,
        attack.expected_damage,
        b.expected_hits,
        b.expected_wounds,
        b.wound_threshold,
        b.expected_unsaved_wounds,
        save_text(b.save),
        width = width
    )
}

fn save_text(save: SaveUsed) -> String {
    match save {
        SaveUsed::Armour(t) if t >= 7 => "no save".to_string(),
        SaveUsed::Armour(t) => format!("{}+ armour", t),
        SaveUsed::Invulnerable(t) => format!("{}+ invulnerable", t),
    }
}
