///! Terminal rendering of dashboard views

use deckhand_common::dashboard::{Level, Notice, Render};
use deckhand_common::tables::{status_error_text, Section, Table};
use deckhand_common::{client_url, ClusterInfo, ErrorBody, Form, Image, Pod};
use serde::Serialize;
use tracing::debug;

use crate::output::{self, OutputFormat};

/// Pod as printed in JSON/YAML output
#[derive(Debug, Serialize)]
struct PodRow<'a> {
    name: &'a str,
    status: &'a str,
    link: String,
}

pub struct TerminalView {
    format: OutputFormat,
}

impl TerminalView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn print<T: Serialize>(&self, data: &T) {
        if let Err(e) = output::print_single(data, self.format) {
            output::print_error(&format!("Failed to format output: {}", e));
        }
    }
}

impl Render for TerminalView {
    fn images(&self, images: &[Image]) {
        match self.format {
            OutputFormat::Table => output::print_table(&output::image_table(images)),
            _ => self.print(&images),
        }
    }

    fn cluster(&self, info: &ClusterInfo) {
        match self.format {
            OutputFormat::Table => {
                for section in Section::cluster(info) {
                    output::print_heading(section.heading);
                    output::print_table(&section.table);
                }
            }
            _ => self.print(info),
        }
    }

    fn pods(&self, namespace: &str, pods: &[Pod]) {
        match self.format {
            OutputFormat::Table => output::print_table(&Table::pods(namespace, pods)),
            _ => {
                let rows: Vec<PodRow> = pods
                    .iter()
                    .map(|pod| PodRow {
                        name: &pod.name,
                        status: &pod.status,
                        link: client_url(namespace),
                    })
                    .collect();
                self.print(&rows);
            }
        }
    }

    fn status_error(&self, message: &str) {
        match self.format {
            OutputFormat::Table => output::print_error(&status_error_text(message)),
            _ => self.print(&ErrorBody { error: message.to_string() }),
        }
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Success => output::print_success(&notice.message),
            Level::Warning => output::print_warning(&notice.message),
            Level::Error => output::print_error(&notice.message),
        }
    }

    fn pending(&self, form: Form, pending: bool) {
        debug!(%form, pending, "request state changed");
    }
}
