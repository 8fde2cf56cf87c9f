use winnow::ascii::dec_uint;
use winnow::combinator::{alt, opt, separated, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::BuildNumber;

// -- Build numbers ------------------------------------------------------------
//
//   build     := (code '-')? component ('.' component)*
//   code      := [A-Za-z]+
//   component := digits | "SNAPSHOT" | '*'

fn product_code<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    terminated(take_while(1.., |c: char| c.is_ascii_alphabetic()), '-').parse_next(input)
}

fn component(input: &mut &str) -> ModalResult<u32> {
    alt((
        "SNAPSHOT".value(BuildNumber::SNAPSHOT),
        '*'.value(BuildNumber::SNAPSHOT),
        dec_uint::<_, u32, _>,
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "build component",
    )))
    .parse_next(input)
}

pub(crate) fn build_number(input: &mut &str) -> ModalResult<(Option<String>, Vec<u32>)> {
    let code = opt(product_code).parse_next(input)?;
    let components: Vec<u32> = separated(1.., component, '.').parse_next(input)?;
    Ok((code.map(str::to_owned), components))
}
