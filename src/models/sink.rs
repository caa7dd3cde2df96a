use tracing::info;

/// Destination for human-readable diagnostic lines
pub trait LogSink {
    fn info(&mut self, message: &str);
}

/// Forwards every line to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&mut self, message: &str) {
        info!(target: "bgg_users::dump", "{}", message);
    }
}

/// Collects lines in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LogSink for MemorySink {
    fn info(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn info(&mut self, message: &str) {
        (**self).info(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.info("first");
        sink.info("second");
        assert_eq!(sink.lines(), ["first", "second"]);
    }

    #[test]
    fn test_sink_through_reference() {
        fn write_to(mut sink: impl LogSink) {
            sink.info("hello");
        }

        let mut sink = MemorySink::new();
        write_to(&mut sink);
        assert_eq!(sink.into_lines(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: must be a no-op
        let mut sink = TracingSink;
        sink.info("dropped");
    }
}
