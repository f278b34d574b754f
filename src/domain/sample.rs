//! The built-in sample hierarchy

use crate::domain::arena::OrgChart;
use crate::domain::entities::Employee;
use crate::domain::error::DomainResult;

/// Builds the sample org chart:
///
/// ```text
/// Ada (CEO)
/// ├── Craig (VP Software): Simone, Ali
/// ├── Arvinder (Chief Design Officer)
/// ├── Angela (VP Retail): Karla
/// └── Phil (VP Marketing): Florida, David, Brian
/// ```
///
/// Only Ada and her direct reports have a salary on record.
pub fn sample_org() -> DomainResult<OrgChart> {
    let mut chart = OrgChart::new(Employee::new("Ada", "CEO", 3_000_000.0)?);
    let ada = chart.root();

    let craig = chart.hire_under(ada, Employee::new("Craig", "VP Software", 1_000_000.0)?)?;
    chart.hire_under(
        ada,
        Employee::new("Arvinder", "Chief Design Officer", 1_000_000.0)?,
    )?;
    let angela = chart.hire_under(ada, Employee::new("Angela", "VP Retail", 1_000_000.0)?)?;
    let phil = chart.hire_under(ada, Employee::new("Phil", "VP Marketing", 1_000_000.0)?)?;

    for name in ["Simone", "Ali"] {
        chart.hire_under(craig, Employee::unsalaried(name, "Software"))?;
    }
    for name in ["Florida", "David", "Brian"] {
        chart.hire_under(phil, Employee::unsalaried(name, "Marketing"))?;
    }
    chart.hire_under(angela, Employee::unsalaried("Karla", "Retail"))?;

    Ok(chart)
}
