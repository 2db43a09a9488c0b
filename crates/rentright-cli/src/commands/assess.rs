//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::error::Result;
use crate::output::Formatter;
use rentright_domain::{WwsCalculator, WwsInput};

/// Execute the assess command.
pub fn execute_assess(args: AssessArgs, formatter: &Formatter) -> Result<()> {
    let input = WwsInput {
        size_m2: args.size,
        rooms: args.rooms,
        energy_label: args.energy_label,
        woz_value: args.woz_value,
    };

    let assessment = WwsCalculator::default().assess(&input)?;
    println!("{}", formatter.assessment(&assessment)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;

    #[test]
    fn test_negative_size_rejected() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = AssessArgs {
            size: -20.0,
            rooms: 2,
            energy_label: None,
            woz_value: None,
        };

        let result = execute_assess(args, &formatter);
        assert!(matches!(result, Err(CliError::Domain(_))));
    }
}
