use stockdeck_core::{DisplaySink, RegionId, ResultKind};

/// Terminal-backed display sink for one region.
///
/// Loading state goes to stderr so stdout carries only the final result
/// text; there is no form to reset in a one-shot CLI invocation.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    region: RegionId,
}

impl TerminalSink {
    pub const fn new(region: RegionId) -> Self {
        Self { region }
    }
}

impl DisplaySink for TerminalSink {
    fn show_loading(&self) {
        eprintln!("⏳ Processing...");
    }

    fn show_result(&self, message: &str, kind: ResultKind) {
        log::debug!("result published to {} ({kind:?})", self.region.name());
        println!("{message}");
    }
}
