use chase_core::{RoundObserver, RoundOutcome, RoundSnapshot};
use std::io::{self, BufRead, Write};

/// Human-readable statistics for one finished round
pub fn round_summary(snapshot: &RoundSnapshot, outcome: &RoundOutcome, alive: usize) -> String {
    let mut summary = format!(
        "Round number {}:\nWolf position: x = {:.3}, y = {:.3}\nAlive sheep: {}\n",
        snapshot.round_no, snapshot.wolf_pos.x, snapshot.wolf_pos.y, alive
    );
    if let RoundOutcome::Captured { sheep_id, .. } = outcome {
        summary.push_str(&format!(
            "Sheep with ID {} has been eaten this round\n",
            sheep_id
        ));
    }
    summary
}

/// Prints round statistics and optionally pauses until a line is read from `input`
pub struct ConsoleReporter<W: Write, I: BufRead> {
    out: W,
    input: Option<I>,
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout, io::StdinLock<'static>> {
    pub fn stdout(wait: bool) -> Self {
        let input = wait.then(|| io::stdin().lock());
        Self::new(io::stdout(), input)
    }
}

impl<W: Write, I: BufRead> ConsoleReporter<W, I> {
    pub fn new(out: W, input: Option<I>) -> Self {
        Self {
            out,
            input,
            error: None,
        }
    }

    /// Returns the first I/O error hit while reporting, if any
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_round(&mut self, summary: &str) -> io::Result<()> {
        writeln!(self.out, "{}", summary)?;
        if let Some(input) = self.input.as_mut() {
            write!(self.out, "Press Enter to move onto next round")?;
            self.out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }
        self.out.flush()
    }

    fn keep_error(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            log::warn!("failed to report round: {}", err);
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write, I: BufRead> RoundObserver for ConsoleReporter<W, I> {
    fn on_round(&mut self, snapshot: &RoundSnapshot, outcome: &RoundOutcome, alive: usize) {
        let summary = round_summary(snapshot, outcome, alive);
        let result = self.write_round(&summary);
        self.keep_error(result);
    }

    fn on_all_eaten(&mut self, _round_no: u32) {
        let result = writeln!(self.out, "All sheep have been eaten");
        self.keep_error(result);
    }
}
