use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::output::{OutputData, Outputter, Schedule, TypeDurations, UserTotals};
use crate::time::format_duration;

const HEADER: [&str; 7] = [
    "User",
    "Business Hours",
    "Afterhours",
    "Weekend",
    "Stat",
    "Company days",
    "Total time",
];

/// Prints one table per schedule and the totals of every user to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutputter {
    shift_details: bool,
}

impl StdoutOutputter {
    /// With `shift_details` the parts of every shift are listed below the tables.
    #[must_use]
    pub const fn new(shift_details: bool) -> Self {
        Self { shift_details }
    }

    pub fn write_to(&self, data: &OutputData, mut writer: impl Write) -> io::Result<()> {
        for schedule in data.schedules() {
            writeln!(writer, "Schedule: {}", schedule.name)?;
            let rows = schedule
                .user_shifts
                .iter()
                .map(|summary| duration_row(&summary.user.name, &summary.durations));
            writeln!(writer, "{}", table(&HEADER, rows))?;
            writeln!(writer)?;

            if self.shift_details {
                write_shift_details(schedule, &mut writer)?;
            }
        }

        writeln!(writer, "Total for {}", data.period().label())?;
        let mut header = HEADER.to_vec();
        header.push("Shifts");
        let totals_by_user = data.totals_by_user();
        let rows = totals_by_user.iter().map(|(name, totals)| {
            let mut row = duration_row(name, &totals.durations);
            row.push(shift_count(totals));
            row
        });
        writeln!(writer, "{}", table(&header, rows))?;

        Ok(())
    }
}

impl Outputter for StdoutOutputter {
    fn print(&self, data: &OutputData) -> anyhow::Result<()> {
        let stdout = io::stdout();
        self.write_to(data, stdout.lock())?;
        Ok(())
    }
}

fn duration_row(name: &str, durations: &TypeDurations) -> Vec<String> {
    vec![
        name.to_string(),
        format_duration(durations.business),
        format_duration(durations.after_hours),
        format_duration(durations.weekend),
        format_duration(durations.stat),
        format_duration(durations.company_day),
        format_duration(durations.on_call),
    ]
}

fn shift_count(totals: &UserTotals) -> String {
    totals.total_shifts.to_string()
}

fn write_shift_details(schedule: &Schedule, writer: &mut impl Write) -> io::Result<()> {
    for summary in &schedule.user_shifts {
        writeln!(writer, "{}'s shifts ({}):", summary.user.name, summary.user.timezone.name())?;

        for (i, attributed) in summary.attributed_shifts.iter().enumerate() {
            let tz = summary.user.timezone;
            writeln!(
                writer,
                "\tShift {}: {} - {} ({})",
                i + 1,
                attributed.shift.start().with_timezone(&tz),
                attributed.shift.end().with_timezone(&tz),
                format_duration(attributed.shift.duration())
            )?;

            for part in &attributed.parts {
                writeln!(
                    writer,
                    "\t\t{:<15} {} - {} ({})",
                    part.attribute().to_string(),
                    part.span().start().with_timezone(&tz),
                    part.span().end().with_timezone(&tz),
                    format_duration(part.duration())
                )?;
            }
        }

        if summary.company_days > 0 {
            writeln!(writer, "\tCompany days worked: {}", summary.company_days)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn table(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.iter().map(|cell| cell.to_uppercase()));

    for row in rows {
        table.add_row(row);
    }

    table
}
