use crate::di::ResolverServices;
use ferrous_resolver_application::use_cases::{CacheSnapshot, Resolution};
use ferrous_resolver_domain::{Command, DomainName, RecordType};
use std::io::Write;
use tracing::{debug, warn};

const SEPARATOR: &str = "***************************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Executes command-file lines and writes their output.
///
/// A failing command never stops the loop; only `quit` or end of input do.
pub struct CommandRunner<W: Write> {
    services: ResolverServices,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    pub fn new(services: ResolverServices, out: W) -> Self {
        Self { services, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs every line of a command file until `quit` or the last line.
    pub async fn run_script(&mut self, script: &str) -> std::io::Result<Flow> {
        for line in script.lines() {
            if self.execute_line(line).await? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        debug!("End of command file");
        Ok(Flow::Continue)
    }

    pub async fn execute_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let Some(command) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };

        writeln!(self.out, "COMMAND:  {}", line.trim_end())?;
        writeln!(self.out)?;

        match command {
            Command::Quit => {
                writeln!(self.out, "Program terminated")?;
                self.out.flush()?;
                return Ok(Flow::Quit);
            }
            Command::Resolve { name, record_type } => self.resolve(&name, record_type).await?,
            Command::PrintCache => {
                let snapshot = self.services.inspect_cache.execute();
                self.print_cache(&snapshot)?;
            }
            Command::Invalid { line, reason } => {
                writeln!(self.out, "Invalid command '{}': {}", line, reason)?;
                writeln!(self.out)?;
            }
            Command::Unknown(line) => {
                debug!(line = %line, "Unknown command");
                writeln!(self.out, "Unknown command.")?;
                writeln!(self.out)?;
            }
        }

        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    async fn resolve(&mut self, name: &DomainName, record_type: RecordType) -> std::io::Result<()> {
        writeln!(self.out, "*** QUERY {} for RRType {}", name, record_type)?;
        match self.services.resolve.execute(name, record_type).await {
            Ok(resolution) => self.print_resolution(&resolution),
            Err(e) => {
                warn!(domain = %name, record_type = %record_type, error = %e, "Resolution failed");
                writeln!(self.out, "Could not resolve {} {}: {}", name, record_type, e)?;
                writeln!(self.out)
            }
        }
    }

    fn print_resolution(&mut self, resolution: &Resolution) -> std::io::Result<()> {
        match (&resolution.nameserver, resolution.server) {
            _ if resolution.cache_hit => writeln!(self.out, "*** Answer found in cache")?,
            (Some(nameserver), Some(server)) => writeln!(
                self.out,
                "*** FINAL RESPONSE from '{}' at {}",
                nameserver,
                server.ip()
            )?,
            _ => {}
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", resolution.response)?;
        writeln!(self.out)
    }

    fn print_cache(&mut self, snapshot: &CacheSnapshot) -> std::io::Result<()> {
        writeln!(self.out, "Answer Cache Contents:")?;
        writeln!(self.out)?;
        let mut current: Option<&DomainName> = None;
        for entry in &snapshot.answers {
            if current != Some(&entry.name) {
                writeln!(self.out, "{} :", entry.name)?;
                current = Some(&entry.name);
            }
            let items: Vec<String> = entry
                .response
                .answers
                .iter()
                .flat_map(|set| set.records.iter().map(|r| format!("'{}'", r)))
                .collect();
            writeln!(self.out, "{} :  [{}]", entry.record_type, items.join(", "))?;
            writeln!(self.out)?;
        }

        writeln!(self.out, "Referral Cache Contents:")?;
        writeln!(self.out)?;
        let mut current: Option<&DomainName> = None;
        for entry in &snapshot.referrals {
            if current != Some(&entry.name) {
                writeln!(self.out, "{} :", entry.name)?;
                current = Some(&entry.name);
            }
            writeln!(
                self.out,
                "{} :  {}",
                entry.record_type,
                entry.record_set.items_text()
            )?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}
