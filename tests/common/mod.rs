use chrono::TimeDelta;
use pager_tally::attribution::ScheduleUserShifts;
use pager_tally::input::toml_input::ShiftFile;
use pager_tally::input::{collect_shifts, Config};

pub const DECEMBER_CONFIG: &str = concat!(
    //
    "timezone = \"Pacific/Auckland\"\n",
    "holidays = [\"Christmas Day\", \"Boxing Day\"]\n",
    "company_days = [\"24/12/2018\", \"27/12/2018\", \"28/12/2018\", \"31/12/2018\"]\n",
    "\n",
    "[business_hours]\n",
    "start = \"08:00\"\n",
    "end = \"17:30\"\n",
    "\n",
    "[period]\n",
    "start = 2018-12-01\n",
    "end = 2019-01-01\n",
    "\n",
    "[[public_holidays]]\n",
    "name = \"Christmas Day\"\n",
    "date = 2018-12-25\n",
    "\n",
    "[[public_holidays]]\n",
    "name = \"Boxing Day\"\n",
    "date = 2018-12-26\n",
    "\n",
    "[[public_holidays]]\n",
    "name = \"Day after New Year's Day\"\n",
    "date = 2019-01-02\n",
    "\n",
    "[[public_holidays]]\n",
    "name = \"Wellington Anniversary Day\"\n",
    "date = 2019-01-21\n",
    "\n",
    "[[public_holidays]]\n",
    "name = \"Auckland Anniversary Day\"\n",
    "date = 2019-01-28\n",
);

pub const DECEMBER_SHIFTS: &str = concat!(
    //
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User1\"\n",
    "start = 2018-12-05T17:00:00+13:00\n",
    "end = 2018-12-06T08:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User1\"\n",
    "start = 2018-12-06T15:30:00+13:00\n",
    "end = 2018-12-06T18:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User1\"\n",
    "start = 2018-12-07T17:00:00+13:00\n",
    "end = 2018-12-08T21:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User1\"\n",
    "start = 2018-12-13T17:00:00+13:00\n",
    "end = 2018-12-14T17:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User2\"\n",
    "start = 2018-12-03T17:00:00+13:00\n",
    "end = 2018-12-05T17:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User2\"\n",
    "start = 2018-12-18T17:00:00+13:00\n",
    "end = 2018-12-19T17:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User2\"\n",
    "start = 2018-12-26T17:00:00+13:00\n",
    "end = 2018-12-27T17:00:00+13:00\n",
    "\n",
    "[[shift]]\n",
    "schedule = \"Primary On Call\"\n",
    "user = \"User2\"\n",
    "start = 2018-12-31T17:00:00+13:00\n",
    "end = 2019-01-01T00:00:00+13:00\n",
);

#[must_use]
pub fn make_config(contents: &str) -> Config {
    Config::from_toml(toml::from_str(contents).expect("config should be valid toml"))
        .build()
        .expect("config should be valid")
}

#[must_use]
pub fn make_shifts(config: &Config, contents: &str) -> ScheduleUserShifts {
    let file: ShiftFile = toml::from_str(contents).expect("shifts should be valid toml");
    let window = config.period().to_span(config.timezone());

    collect_shifts(&file, config.timezone(), &window).expect("shifts should be valid")
}

#[must_use]
#[allow(dead_code)]
pub fn hours(hours: i64, minutes: i64) -> TimeDelta {
    TimeDelta::minutes(hours * 60 + minutes)
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
