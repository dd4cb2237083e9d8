use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct ReportRow {
    label: String,
    value: String,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Report {
    title: String,
    rows: Vec<ReportRow>,
}
