//! Plain-text rendering of the carousel: three slot panels, the highlight
//! panel and the report table.

use std::{
    fmt::Write as _,
    sync::{Arc, Mutex, PoisonError},
};

use carousel_core::{CarouselSnapshot, RenderTarget, ReportRow, SlotRole};
use shared::domain::RankedResult;

/// Shown when a result arrives without reason codes.
pub const FALLBACK_REASON_CODES: [&str; 5] = [
    "cost_of_living",
    "climate",
    "safety",
    "walkability",
    "job_market",
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub visible: bool,
    pub cards: Vec<String>,
}

pub type SharedSlotView = Arc<Mutex<SlotView>>;

/// Render target that writes cards into a shared view the CLI prints.
pub struct TerminalSlot {
    view: SharedSlotView,
}

impl TerminalSlot {
    pub fn new(view: SharedSlotView) -> Self {
        Self { view }
    }
}

impl RenderTarget for TerminalSlot {
    fn render(&mut self, results: &[RankedResult]) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        view.cards = results.iter().map(card_line).collect();
    }

    fn set_visible(&mut self, visible: bool) {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible = visible;
    }
}

pub fn card_line(result: &RankedResult) -> String {
    let mut line = format!("#{:<3} {}", result.rank.0, place_name(result));
    if let Some(scaled) = result.scaled_score {
        let _ = write!(line, "  [{scaled}]");
    }
    line
}

fn place_name(result: &RankedResult) -> String {
    if result.secondary_label.is_empty() {
        result.primary_label.clone()
    } else {
        format!("{}, {}", result.primary_label, result.secondary_label)
    }
}

pub fn reason_labels(result: &RankedResult) -> Vec<String> {
    if result.reason_codes.is_empty() {
        FALLBACK_REASON_CODES.iter().map(|code| reason_label(code)).collect()
    } else {
        result.reason_codes.iter().map(|code| reason_label(code)).collect()
    }
}

fn reason_label(code: &str) -> String {
    code.replace('_', " ")
}

pub fn render_frame(
    snapshot: &CarouselSnapshot,
    views: &[SharedSlotView; 3],
    highlighted: Option<&RankedResult>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "window {}-{} of {}  {}{}",
        snapshot.window.start(),
        snapshot.window.end(),
        snapshot.total,
        if snapshot.navigation.can_retreat { "<" } else { " " },
        if snapshot.navigation.can_advance { ">" } else { " " },
    );

    for role in SlotRole::ALL {
        let Some(slot) = snapshot.slot(role) else {
            continue;
        };
        let view = views[slot.index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let label = match role {
            SlotRole::Previous => "previous",
            SlotRole::Current => "current",
            SlotRole::Next => "next",
        };

        if !view.visible {
            let _ = writeln!(out, "  {label:<8} (hidden)");
            continue;
        }
        let _ = writeln!(out, "  {label:<8}");
        for card in &view.cards {
            let _ = writeln!(out, "    {card}");
        }
    }

    match highlighted {
        Some(result) => {
            let _ = writeln!(out, "highlight #{} {}", result.rank, place_name(result));
            let _ = writeln!(out, "  image: {}", result.image_key);
            let _ = writeln!(
                out,
                "  you might like {} because of its: {}",
                result.primary_label,
                reason_labels(result).join(", ")
            );
        }
        None => {
            let _ = writeln!(out, "highlight: none");
        }
    }

    out
}

pub fn render_report_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<24} {:<18} {:>7} {:>6}  reasons",
        "rank", "city", "region", "score", "scaled"
    );
    for row in rows {
        let score = row
            .score
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".into());
        let scaled = row
            .scaled_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<5} {:<24} {:<18} {:>7} {:>6}  {}",
            row.rank.0,
            row.primary_label,
            row.secondary_label,
            score,
            scaled,
            row.reasons.join(", ")
        );
    }
    out
}
