use chumsky::prelude::*;
use miette::*;

use crate::bank::DigitBank;

/// One bank per line. Blank lines are skipped and spaces or tabs around a
/// bank are ignored; anything else that is not a digit fails the parse.
pub fn banks<'a>() -> impl Parser<'a, &'a str, Vec<DigitBank>, extra::Err<Rich<'a, char>>> {
    let bank = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<DigitBank>()
                .map_err(|e| Rich::custom(span, e))
        });

    let line = text::inline_whitespace()
        .ignore_then(bank.then_ignore(text::inline_whitespace()).or_not());

    line.separated_by(text::newline())
        .collect::<Vec<_>>()
        .map(|lines: Vec<Option<DigitBank>>| lines.into_iter().flatten().collect())
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_banks(input: &str) -> Result<Vec<DigitBank>> {
    let banks = banks()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    tracing::debug!(banks = banks.len(), "parsed battery banks");
    Ok(banks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_bank_per_line() -> Result<()> {
        let banks = parse_banks("12345\n67890\n")?;
        assert_eq!(
            banks,
            vec![
                DigitBank::from_digits(&[1, 2, 3, 4, 5]).into_diagnostic()?,
                DigitBank::from_digits(&[6, 7, 8, 9, 0]).into_diagnostic()?,
            ]
        );
        Ok(())
    }

    #[test]
    fn skips_blank_lines_and_padding() -> Result<()> {
        let banks = parse_banks("\n  123  \r\n\n\t45\n   \n")?;
        let rendered: Vec<String> = banks.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["123", "45"]);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_banks() -> Result<()> {
        assert!(parse_banks("")?.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(parse_banks("123a45").is_err());
        assert!(parse_banks("12\n1.234\n").is_err());
    }
}
