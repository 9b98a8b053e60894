use crate::shared::display::DisplayState;
use crate::shared::types::MetricSampleDto;

/// Period of the refresh timer.
pub const POLL_INTERVAL_MS: u32 = 2_000;

/// Ticks that may find a fetch still outstanding before it is abandoned and
/// a fresh one issued. The server-side timeout does not cover the hop from
/// the browser, so a request can otherwise hang the slot forever.
pub const STALL_TICKS: u32 = 5;

/// Messages driving the polling coroutine.
#[derive(Debug, Clone, PartialEq)]
pub enum PollCommand {
    /// The API key changed (or the card mounted): rearm and fetch now.
    Rekey(String),
    /// Timer fired.
    Tick,
}

/// Decides whether a fetch may start and whether its response is still wanted.
///
/// Each key change opens a new generation. Responses from an older generation
/// are dropped, and at most one fetch per generation is outstanding.
#[derive(Debug, Clone, Default)]
pub struct PollGate {
    api_key: String,
    generation: u64,
    in_flight: bool,
    skipped: u32,
}

/// Proof that a fetch was started under a given key and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTicket {
    generation: u64,
    api_key: String,
}

impl PollTicket {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl PollGate {
    /// The key is kept verbatim and queried as typed; only a blank key is
    /// treated as "no key".
    pub fn rekey(&mut self, api_key: &str) {
        self.api_key = api_key.to_string();
        self.generation += 1;
        self.in_flight = false;
        self.skipped = 0;
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// `None` when the key is blank or a fetch is already outstanding.
    pub fn begin(&mut self) -> Option<PollTicket> {
        if self.api_key.trim().is_empty() {
            return None;
        }
        if self.in_flight {
            self.skipped += 1;
            if self.skipped < STALL_TICKS {
                return None;
            }
            // Abandon it: a late answer now carries an old generation
            self.generation += 1;
        }
        self.in_flight = true;
        self.skipped = 0;
        Some(PollTicket {
            generation: self.generation,
            api_key: self.api_key.clone(),
        })
    }

    /// Marks the fetch done. Returns whether its result should be applied.
    pub fn finish(&mut self, ticket: &PollTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.skipped = 0;
        true
    }
}

/// Handles one command and returns the ticket of the fetch to start, if any.
///
/// Switching to a different non-blank key clears what is on screen, so data
/// of the previous key is never shown under the new one. A blank key changes
/// nothing.
pub fn on_command(
    gate: &mut PollGate,
    display: &mut DisplayState,
    cmd: PollCommand,
) -> Option<PollTicket> {
    if let PollCommand::Rekey(key) = cmd {
        if !key.trim().is_empty() && key != display.api_key() {
            *display = DisplayState::default();
        }
        gate.rekey(&key);
    }
    gate.begin()
}

/// Applies a finished fetch. Returns `false` if the response was stale.
pub fn on_response(
    gate: &mut PollGate,
    display: &mut DisplayState,
    ticket: &PollTicket,
    result: Result<Vec<MetricSampleDto>, String>,
) -> bool {
    if !gate.finish(ticket) {
        return false;
    }
    display.apply(ticket.api_key(), result);
    true
}
