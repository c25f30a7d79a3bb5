use super::parse_reference_year;
use crate::exceptions::CliError;
use chrono::NaiveDate;
use tthh_core::{InputConfig, parse_date_text_with_year, parse_iso};
use tthh_tui::Employee;

/// Open the absence request form in the terminal
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct FormArgs {
    /// Employee the request is filed for
    #[arg(long, short, default_value = "Empleado")]
    pub employee: String,

    /// Hire date, shown read-only. YYYY-MM-DD or anything a date field accepts
    #[arg(long)]
    pub hire_date: Option<String>,

    /// Year used for DD/MM and as the centre of the two-digit year window.
    /// Overrides TTHH_REFERENCE_YEAR
    #[arg(long, short = 'y', value_parser = parse_reference_year)]
    pub reference_year: Option<i32>,
}

/// Accept the canonical ISO form first, then anything a date field accepts,
/// reading short years against `reference_year`
pub fn parse_hire_date(text: &str, reference_year: i32) -> Result<NaiveDate, CliError> {
    if let Some(date) = parse_iso(text) {
        return Ok(date);
    }
    parse_date_text_with_year(text, reference_year).map_err(|source| CliError::Parse {
        text: text.to_string(),
        source,
    })
}

impl FormArgs {
    pub fn employee(&self, config: &InputConfig) -> Result<Employee, CliError> {
        let hire_date = self
            .hire_date
            .as_deref()
            .map(|text| parse_hire_date(text, config.effective_year()))
            .transpose()?;
        Ok(Employee::new(self.employee.clone(), hire_date))
    }

    pub async fn run(&self, config: InputConfig) -> Result<(), CliError> {
        let config = config.with_reference_year(self.reference_year);
        let employee = self.employee(&config)?;
        tthh_tui::tui_main(config, employee).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(hire_date: Option<&str>, reference_year: Option<i32>) -> FormArgs {
        FormArgs {
            employee: "Ana Torres".to_string(),
            hire_date: hire_date.map(str::to_string),
            reference_year,
        }
    }

    #[test]
    fn test_hire_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 1);
        assert_eq!(parse_hire_date("2020-03-01", 2025).ok(), expected);
        assert_eq!(parse_hire_date("01/03/2020", 2025).ok(), expected);
        assert_eq!(parse_hire_date("01/03/20", 2025).ok(), expected);
        assert!(matches!(
            parse_hire_date("primero de marzo", 2025),
            Err(CliError::Parse { .. })
        ));
    }

    #[test]
    fn test_employee_from_args() {
        let employee = args(Some("2020-03-01"), None)
            .employee(&InputConfig::default())
            .unwrap();
        assert_eq!(employee.name, "Ana Torres");
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2020, 3, 1));

        let employee = args(None, None).employee(&InputConfig::default()).unwrap();
        assert_eq!(employee.hire_date, None);
    }

    #[test]
    fn test_short_hire_date_uses_reference_year() {
        let a = args(Some("01/03"), Some(2020));
        let config = InputConfig::default().with_reference_year(a.reference_year);
        let employee = a.employee(&config).unwrap();
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2020, 3, 1));

        let config = InputConfig {
            reference_year: Some(2019),
            ..InputConfig::default()
        };
        let employee = args(Some("01/03"), None).employee(&config).unwrap();
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2019, 3, 1));
    }

    #[test]
    fn test_unparseable_hire_date_is_an_error() {
        let err = args(Some("ayer"), None)
            .employee(&InputConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }
}
