use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq, new)]
pub struct ClosingPrice {
    date: NaiveDate,
    close: Decimal,
}

/// Daily closes, most recent first. Index `n` is `n` trading days back.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClosingPriceSeries {
    closes: Vec<ClosingPrice>,
}

impl ClosingPriceSeries {
    pub fn from_unordered(mut closes: Vec<ClosingPrice>) -> Self {
        closes.sort_by(|a, b| b.date.cmp(&a.date));
        Self { closes }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<&ClosingPrice> {
        self.closes.get(offset)
    }

    pub fn latest(&self) -> Option<&ClosingPrice> {
        self.closes.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClosingPrice> {
        self.closes.iter()
    }
}
