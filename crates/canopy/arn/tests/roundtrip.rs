//! Property test: formatting then parsing a COLON identifier with literal
//! region and account is the identity.

use canopy_arn::{format_arn, parse_arn, ArnFormat, ArnParts};
use canopy_types::{DeferredValue, TargetEnvironment, TokenRegistry};
use proptest::prelude::*;

fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn arb_resource_name() -> impl Strategy<Value = String> {
    // may itself contain ':' (the COLON format splits on the first six)
    "[a-zA-Z0-9/_:.-]{1,24}"
}

proptest! {
    #[test]
    fn colon_format_round_trips(
        region in arb_segment(),
        account in "[0-9]{12}",
        service in arb_segment(),
        resource in arb_segment(),
        name in arb_resource_name(),
    ) {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved(region, account);
        let parts = ArnParts::in_env(&env, service, resource)
            .with_format(ArnFormat::Colon)
            .with_resource_name(DeferredValue::Literal(name));

        let formatted = format_arn(&mut tokens, &parts);
        let literal = formatted.as_literal().expect("literal parts format to a literal");
        let parsed = parse_arn(literal, ArnFormat::Colon).unwrap();
        prop_assert_eq!(parsed, parts);
    }
}
