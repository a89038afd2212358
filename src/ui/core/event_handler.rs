use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(EventType::from(crossterm::event::read()?));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Tick,
    Other,
}

impl From<Event> for EventType {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::Key(key),
            Event::Resize(w, h) => Self::Resize(w, h),
            Event::FocusGained => Self::FocusGained,
            Event::FocusLost => Self::FocusLost,
            _ => Self::Other,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }
}
