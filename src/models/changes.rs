use strum_macros::{Display, EnumIter};

/// Look-back windows, measured in trading days.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum ChangeWindow {
    #[strum(to_string = "Daily Change (%)")]
    Daily,
    #[strum(to_string = "Weekly Change (%)")]
    Weekly,
    #[strum(to_string = "Monthly Change (%)")]
    Monthly,
    #[strum(to_string = "Yearly Change (%)")]
    Yearly,
}

impl ChangeWindow {
    pub fn offset(&self) -> usize {
        match self {
            ChangeWindow::Daily => 1,
            ChangeWindow::Weekly => 5,
            ChangeWindow::Monthly => 20,
            ChangeWindow::Yearly => 250,
        }
    }

    /// Closes needed for every window to have a reference price.
    pub fn required_closes() -> usize {
        ChangeWindow::Yearly.offset() + 1
    }
}

/// One formatted entry per [`ChangeWindow`], in window order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PercentageChanges {
    entries: Vec<(ChangeWindow, String)>,
}

impl PercentageChanges {
    pub(crate) fn new(entries: Vec<(ChangeWindow, String)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, window: ChangeWindow) -> Option<&str> {
        self.entries
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ChangeWindow, String)> {
        self.entries.iter()
    }
}
