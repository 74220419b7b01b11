// ============================================================================
// console.rs — Hook transcript (success / error / header lines)
// ============================================================================
//
// Lines go to stdout, coloured. With a channel attached they are sent to the
// receiver uncoloured instead.
// ============================================================================

use std::sync::mpsc;

use colored::*;

#[derive(Debug, Clone, Default)]
pub struct Console {
    output_tx: Option<mpsc::Sender<String>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self { output_tx: None }
    }

    pub fn channel(output_tx: mpsc::Sender<String>) -> Self {
        Self { output_tx: Some(output_tx) }
    }

    pub fn success(&self, msg: &str) {
        self.emit(
            format!("  Success:  {}", msg),
            || format!("  {}  {}", "Success:".green().bold(), msg),
        );
    }

    pub fn error(&self, msg: &str) {
        self.emit(
            format!("  Error:  {}", msg),
            || format!("  {}  {}", "Error:".red().bold(), msg),
        );
    }

    pub fn header(&self, msg: &str) {
        self.blank();
        self.emit(
            format!(" ### {} ### ", msg),
            || format!(" {} ", format!("### {} ###", msg).cyan().bold()),
        );
        self.blank();
    }

    pub fn blank(&self) {
        self.emit(String::new(), String::new);
    }

    fn emit(&self, plain: String, coloured: impl FnOnce() -> String) {
        match &self.output_tx {
            // A dropped receiver just means nobody is listening any more.
            Some(tx) => {
                let _ = tx.send(plain);
            }
            None => println!("{}", coloured()),
        }
    }
}
