/// Colour bucket for a status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Alert,
    Positive,
    Neutral,
}

pub const ALERT_LINE: &str = "#ef4444"; // red-500
pub const NORMAL_LINE: &str = "#10b981"; // emerald-500

impl Tone {
    pub fn for_status(status: &str) -> Self {
        match status {
            "critical" => Tone::Alert,
            "healthy" => Tone::Positive,
            _ => Tone::Neutral,
        }
    }

    /// Border and glow of the dashboard card.
    pub fn card_class(self) -> &'static str {
        match self {
            Tone::Alert => "relative overflow-hidden rounded-xl border p-6 transition-all duration-500 border-red-500/50 bg-red-500/5 shadow-lg shadow-red-500/20",
            Tone::Positive => "relative overflow-hidden rounded-xl border p-6 transition-all duration-500 border-emerald-500/50 bg-emerald-500/5 shadow-lg shadow-emerald-500/20",
            Tone::Neutral => "relative overflow-hidden rounded-xl border p-6 transition-all duration-500 border-zinc-800 bg-zinc-900",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Alert => "px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wider bg-red-500 text-white",
            Tone::Positive => "px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wider bg-emerald-500 text-white",
            Tone::Neutral => "px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wider bg-zinc-800 text-zinc-500",
        }
    }

    /// Only an alert changes the line; everything else draws the normal colour.
    pub fn line_color(self) -> &'static str {
        match self {
            Tone::Alert => ALERT_LINE,
            Tone::Positive | Tone::Neutral => NORMAL_LINE,
        }
    }
}
