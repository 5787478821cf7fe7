use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::PlanAction;
use crate::resource::{AttributeChange, ResourceRecord};

#[derive(Tabled)]
struct AttributeRow {
    attribute: &'static str,
    value: String,
}

#[derive(Tabled)]
struct ChangeRow {
    attribute: String,
    before: String,
    after: String,
}

impl From<&AttributeChange> for ChangeRow {
    fn from(change: &AttributeChange) -> Self {
        Self {
            attribute: change.attribute.clone(),
            before: change.before.clone(),
            after: change.after.clone(),
        }
    }
}

pub fn render_record(record: &ResourceRecord) -> String {
    let rows = vec![
        AttributeRow {
            attribute: "id",
            value: record.id.to_string(),
        },
        AttributeRow {
            attribute: "role_arn",
            value: record.attributes.role_arn.to_string(),
        },
        AttributeRow {
            attribute: "log_level",
            value: record.attributes.log_level.to_string(),
        },
        AttributeRow {
            attribute: "disable_all_logs",
            value: record.attributes.disable_all_logs.to_string(),
        },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_plan(resource_type: &str, action: &PlanAction) -> String {
    match action {
        PlanAction::Update { changes } => {
            let rows: Vec<ChangeRow> = changes.iter().map(ChangeRow::from).collect();
            format!(
                "{}: {}\n{}",
                resource_type,
                action,
                Table::new(rows).with(Style::rounded())
            )
        }
        _ => format!("{}: {}", resource_type, action),
    }
}
