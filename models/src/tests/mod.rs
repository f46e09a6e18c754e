mod language;
mod status_report;
