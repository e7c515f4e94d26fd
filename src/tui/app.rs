//! Results dashboard state.

use crate::narrative::narrative_lines;
use crate::reports::AuditReport;

/// Rows moved by a page scroll.
const PAGE_SIZE: u16 = 10;

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Narrative,
    Initiatives,
}

impl Pane {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Narrative => Self::Initiatives,
            Self::Initiatives => Self::Narrative,
        }
    }
}

/// Category chart shown in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartView {
    #[default]
    Radar,
    Gauges,
}

impl ChartView {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Radar => Self::Gauges,
            Self::Gauges => Self::Radar,
        }
    }
}

/// State of the results dashboard.
#[derive(Debug)]
pub struct ResultsApp {
    pub report: AuditReport,
    pub focus: Pane,
    pub chart: ChartView,
    /// First visible narrative line
    pub narrative_scroll: u16,
    /// Highlighted initiative
    pub selected: usize,
    pub should_quit: bool,
    /// Transient message shown in the footer
    pub status_message: Option<String>,
    pub tick: u64,
    narrative_len: u16,
}

impl ResultsApp {
    #[must_use]
    pub fn new(report: AuditReport) -> Self {
        let narrative_len = report
            .result
            .ai_analysis
            .as_deref()
            .map_or(0, |text| narrative_lines(text).len());
        let focus = if narrative_len == 0 {
            Pane::Initiatives
        } else {
            Pane::Narrative
        };
        Self {
            report,
            focus,
            chart: ChartView::default(),
            narrative_scroll: 0,
            selected: 0,
            should_quit: false,
            status_message: None,
            tick: 0,
            narrative_len: u16::try_from(narrative_len).unwrap_or(u16::MAX),
        }
    }

    fn max_scroll(&self) -> u16 {
        self.narrative_len.saturating_sub(1)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn toggle_chart(&mut self) {
        self.chart = self.chart.toggle();
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Move down within the focused pane.
    pub fn down(&mut self) {
        match self.focus {
            Pane::Narrative => {
                self.narrative_scroll = (self.narrative_scroll + 1).min(self.max_scroll());
            }
            Pane::Initiatives => {
                let count = self.report.result.recommendations.len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
        }
    }

    /// Move up within the focused pane.
    pub fn up(&mut self) {
        match self.focus {
            Pane::Narrative => self.narrative_scroll = self.narrative_scroll.saturating_sub(1),
            Pane::Initiatives => self.selected = self.selected.saturating_sub(1),
        }
    }

    pub fn page_down(&mut self) {
        self.narrative_scroll = (self.narrative_scroll + PAGE_SIZE).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.narrative_scroll = self.narrative_scroll.saturating_sub(PAGE_SIZE);
    }

    pub fn home(&mut self) {
        match self.focus {
            Pane::Narrative => self.narrative_scroll = 0,
            Pane::Initiatives => self.selected = 0,
        }
    }
}
