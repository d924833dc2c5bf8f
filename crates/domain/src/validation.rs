//! Invariant checks for vault status records.
//!
//! Checks run in a fixed order: ticks, tokens, range flags, prices,
//! holdings, fees, gauge state. [`validate`] stops at the first violation,
//! [`violations`] collects all of them.

use crate::config::StatusConfig;
use crate::enums::PositionLocation;
use crate::error::ValidationError;
use crate::math::tick;
use crate::vault_status::VaultStatusRecord;
use rust_decimal::Decimal;

/// Returns the first violated invariant, if any.
pub fn validate(record: &VaultStatusRecord, config: &StatusConfig) -> Result<(), ValidationError> {
    match violations(record, config).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Returns every violated invariant.
pub fn violations(record: &VaultStatusRecord, config: &StatusConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_ticks(record, &mut errors);
    check_tokens(record, config, &mut errors);
    check_range(record, &mut errors);
    check_prices(record, config, &mut errors);
    check_holdings(record, &mut errors);
    check_fees(record, &mut errors);
    check_gauge(record, &mut errors);
    errors
}

fn check_ticks(record: &VaultStatusRecord, errors: &mut Vec<ValidationError>) {
    for (field, value) in [
        ("tick", record.tick),
        ("lower_tick", record.lower_tick),
        ("upper_tick", record.upper_tick),
    ] {
        if !tick::is_in_bounds(value) {
            errors.push(ValidationError::TickOutOfBounds { field, tick: value });
        }
    }

    if record.lower_tick > record.upper_tick {
        errors.push(ValidationError::InvertedTickRange {
            lower: record.lower_tick,
            upper: record.upper_tick,
        });
    }

    if record.tick_spacing <= 0 {
        errors.push(ValidationError::NonPositiveTickSpacing(record.tick_spacing));
        return;
    }

    for (field, value) in [
        ("lower_tick", record.lower_tick),
        ("upper_tick", record.upper_tick),
    ] {
        if !tick::is_aligned(value, record.tick_spacing) {
            errors.push(ValidationError::MisalignedTick {
                field,
                tick: value,
                spacing: record.tick_spacing,
            });
        }
    }
}

fn check_tokens(
    record: &VaultStatusRecord,
    config: &StatusConfig,
    errors: &mut Vec<ValidationError>,
) {
    let (token0, token1) = (&record.token0, &record.token1);
    if token0.is_same_asset(token1) {
        errors.push(ValidationError::DuplicateToken(token0.address.clone()));
    } else if config.enforce_token_order
        && token0.address.to_lowercase() > token1.address.to_lowercase()
    {
        errors.push(ValidationError::TokenOrder {
            token0: token0.address.clone(),
            token1: token1.address.clone(),
        });
    }
}

fn check_range(record: &VaultStatusRecord, errors: &mut Vec<ValidationError>) {
    let expected = record.expected_range_side();
    if record.range_side != expected {
        errors.push(ValidationError::RangeSideMismatch {
            actual: record.range_side,
            expected,
            tick: record.tick,
            lower: record.lower_tick,
            upper: record.upper_tick,
        });
    }

    if record.out_of_range != record.range_side.is_out_of_range() {
        errors.push(ValidationError::OutOfRangeFlagMismatch {
            out_of_range: record.out_of_range,
            range_side: record.range_side,
        });
    }
}

fn check_prices(
    record: &VaultStatusRecord,
    config: &StatusConfig,
    errors: &mut Vec<ValidationError>,
) {
    // Without a position both bounds are quoted at the current tick.
    let (lower, upper) = if record.has_position() {
        (record.lower_tick, record.upper_tick)
    } else {
        (record.tick, record.tick)
    };
    let expected_ticks = [record.tick, lower, upper];

    for ((point, price), expected) in record.prices.points().into_iter().zip(expected_ticks) {
        if price.tick != expected {
            errors.push(ValidationError::PriceTickMismatch {
                point,
                expected,
                actual: price.tick,
            });
        }

        if price.p_t1_t0 <= Decimal::ZERO {
            errors.push(ValidationError::NonPositivePrice {
                point,
                value: price.p_t1_t0,
            });
        } else if !price.is_reciprocal(config.price_tolerance) {
            errors.push(ValidationError::PriceNotReciprocal {
                point,
                p_t1_t0: price.p_t1_t0,
                p_t0_t1: price.p_t0_t1,
            });
        }
    }
}

fn check_holdings(record: &VaultStatusRecord, errors: &mut Vec<ValidationError>) {
    let holdings = &record.holdings;
    for (field, value) in [
        ("holdings.vault_idle.token0", holdings.vault_idle.token0),
        ("holdings.vault_idle.token1", holdings.vault_idle.token1),
        ("holdings.in_position.token0", holdings.in_position.token0),
        ("holdings.in_position.token1", holdings.in_position.token1),
        ("holdings.totals.token0", holdings.totals.token0),
        ("holdings.totals.token1", holdings.totals.token1),
    ] {
        push_if_negative(field, value, errors);
    }

    match holdings.vault_idle.checked_add(&holdings.in_position) {
        Ok(expected) => {
            for (token, total, expected) in [
                ("token0", holdings.totals.token0, expected.token0),
                ("token1", holdings.totals.token1, expected.token1),
            ] {
                if total != expected {
                    errors.push(ValidationError::TotalsMismatch {
                        token,
                        total,
                        expected,
                    });
                }
            }
        }
        Err(overflow) => errors.push(overflow),
    }

    if let Some(symbols) = &holdings.symbols {
        for (field, actual, expected) in [
            ("holdings.symbols.token0", &symbols.token0, &record.token0.symbol),
            ("holdings.symbols.token1", &symbols.token1, &record.token1.symbol),
        ] {
            if actual != expected {
                errors.push(ValidationError::HoldingsLabelMismatch {
                    field,
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }
    }

    if let Some(addresses) = &holdings.addresses {
        for (field, actual, expected) in [
            ("holdings.addresses.token0", &addresses.token0, &record.token0.address),
            ("holdings.addresses.token1", &addresses.token1, &record.token1.address),
        ] {
            if !actual.same_as(expected) {
                errors.push(ValidationError::HoldingsLabelMismatch {
                    field,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
    }
}

fn check_fees(record: &VaultStatusRecord, errors: &mut Vec<ValidationError>) {
    push_if_negative("fees_uncollected.token0", record.fees_uncollected.token0, errors);
    push_if_negative("fees_uncollected.token1", record.fees_uncollected.token1, errors);
}

fn check_gauge(record: &VaultStatusRecord, errors: &mut Vec<ValidationError>) {
    let gauge_present = !record.gauge.is_zero();

    if let Some(has_gauge) = record.has_gauge
        && has_gauge != gauge_present
    {
        errors.push(ValidationError::GaugeFlagMismatch {
            has_gauge,
            gauge: record.gauge.clone(),
        });
    }

    let staked = record.staked.unwrap_or(false);
    if staked && !gauge_present {
        errors.push(ValidationError::StakedWithoutGauge);
    }

    if let Some(actual) = record.position_location {
        let expected = PositionLocation::derive(record.position_token_id, staked);
        if actual != expected {
            errors.push(ValidationError::PositionLocationMismatch { actual, expected });
        }
    }
}

fn push_if_negative(field: &'static str, value: Decimal, errors: &mut Vec<ValidationError>) {
    if value.is_sign_negative() && !value.is_zero() {
        errors.push(ValidationError::NegativeAmount { field, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RangeSide;
    use crate::test_fixtures::sample_record;
    use crate::value_objects::{Address, PricePoint, TokenAmounts, TokenPair};
    use rust_decimal_macros::dec;

    fn config() -> StatusConfig {
        StatusConfig::default()
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(violations(&sample_record(), &config()).is_empty());
        assert!(validate(&sample_record(), &config()).is_ok());
    }

    #[test]
    fn test_inverted_ticks() {
        let mut record = sample_record();
        record.lower_tick = 210;
        record.prices.lower = PricePoint::new(210, dec!(1.6), dec!(0.625));

        let errors = violations(&record, &config());
        assert!(errors.contains(&ValidationError::InvertedTickRange {
            lower: 210,
            upper: 200
        }));
    }

    #[test]
    fn test_equal_ticks_are_allowed() {
        let mut record = sample_record();
        record.lower_tick = 200;
        record.prices.lower = PricePoint::new(200, dec!(1.6), dec!(0.625));
        record.sync_range();
        assert_eq!(record.range_side, RangeSide::Below);
        assert!(validate(&record, &config()).is_ok());
    }

    #[test]
    fn test_misaligned_ticks() {
        let mut record = sample_record();
        record.upper_tick = 205;
        record.prices.upper = PricePoint::new(205, dec!(1.6), dec!(0.625));

        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::MisalignedTick {
                field: "upper_tick",
                tick: 205,
                spacing: 10
            })
        );
    }

    #[test]
    fn test_non_positive_tick_spacing() {
        let mut record = sample_record();
        record.tick_spacing = 0;
        assert_eq!(
            violations(&record, &config()),
            vec![ValidationError::NonPositiveTickSpacing(0)]
        );
    }

    #[test]
    fn test_tick_out_of_bounds() {
        let mut record = sample_record();
        record.tick = tick::MAX_TICK + 1;
        let errors = violations(&record, &config());
        assert_eq!(
            errors[0],
            ValidationError::TickOutOfBounds {
                field: "tick",
                tick: tick::MAX_TICK + 1
            }
        );
    }

    #[test]
    fn test_duplicate_tokens() {
        let mut record = sample_record();
        record.token1.address = Address::new(record.token0.address.as_str().to_uppercase());
        assert!(matches!(
            validate(&record, &config()),
            Err(ValidationError::DuplicateToken(_))
        ));
    }

    #[test]
    fn test_out_of_range_flag_must_follow_side() {
        let mut record = sample_record();
        record.out_of_range = true;
        assert_eq!(
            violations(&record, &config()),
            vec![ValidationError::OutOfRangeFlagMismatch {
                out_of_range: true,
                range_side: RangeSide::Inside
            }]
        );
    }

    #[test]
    fn test_below_range() {
        let mut record = sample_record();
        record.tick = -5;
        record.prices.current = PricePoint::from_price(-5, dec!(0.9995));
        record.sync_range();
        assert_eq!(record.range_side, RangeSide::Below);
        assert!(record.out_of_range);
        assert!(validate(&record, &config()).is_ok());
    }

    #[test]
    fn test_no_position_is_inside_at_any_tick() {
        let mut record = sample_record();
        record.position_token_id = 0;
        record.liquidity = 0;
        record.lower_tick = 0;
        record.upper_tick = 0;
        record.tick = 5_000;
        let current = PricePoint::from_price(5_000, dec!(1.6487));
        record.prices.current = current;
        record.prices.lower = current;
        record.prices.upper = current;
        record.holdings.in_position = TokenAmounts::zero();
        record.holdings.totals = record.holdings.vault_idle;

        assert_eq!(validate(&record, &config()), Ok(()));

        record.range_side = RangeSide::Above;
        record.out_of_range = true;
        assert!(matches!(
            validate(&record, &config()),
            Err(ValidationError::RangeSideMismatch {
                expected: RangeSide::Inside,
                ..
            })
        ));
    }

    #[test]
    fn test_price_not_reciprocal() {
        let mut record = sample_record();
        record.prices.upper.p_t0_t1 = dec!(0.7);
        assert_eq!(
            violations(&record, &config()),
            vec![ValidationError::PriceNotReciprocal {
                point: "upper",
                p_t1_t0: dec!(1.6),
                p_t0_t1: dec!(0.7)
            }]
        );

        let loose = config().with_price_tolerance(dec!(0.2));
        assert!(validate(&record, &loose).is_ok());
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut record = sample_record();
        record.prices.lower = PricePoint::from_price(0, Decimal::ZERO);
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::NonPositivePrice {
                point: "lower",
                value: Decimal::ZERO
            })
        );
    }

    #[test]
    fn test_price_tick_mismatch() {
        let mut record = sample_record();
        record.prices.current.tick = 110;
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::PriceTickMismatch {
                point: "current",
                expected: 100,
                actual: 110
            })
        );
    }

    #[test]
    fn test_totals_mismatch_reports_both_tokens() {
        let mut record = sample_record();
        record.holdings.totals = TokenAmounts::new(dec!(5), dec!(7));
        let errors = violations(&record, &config());
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[1],
            ValidationError::TotalsMismatch {
                token: "token1",
                total: dec!(7),
                expected: dec!(6)
            }
        );
    }

    #[test]
    fn test_totals_ignore_valuation() {
        let mut record = sample_record();
        record.holdings.totals = record.holdings.totals.with_total_usd(dec!(12));
        assert!(validate(&record, &config()).is_ok());
    }

    #[test]
    fn test_holdings_labels_follow_tokens() {
        let mut record = sample_record();
        record.holdings = record
            .holdings
            .clone()
            .with_labels(&record.token0, &record.token1);
        assert!(validate(&record, &config()).is_ok());

        // Address case is not significant.
        let addresses = record.holdings.addresses.as_mut().unwrap();
        addresses.token1 = Address::new(record.token1.address.as_str().to_uppercase());
        assert!(validate(&record, &config()).is_ok());

        record.holdings.symbols = Some(TokenPair::new("WETH".to_string(), "USDC".to_string()));
        assert_eq!(
            violations(&record, &config()),
            vec![
                ValidationError::HoldingsLabelMismatch {
                    field: "holdings.symbols.token0",
                    expected: "USDC".to_string(),
                    actual: "WETH".to_string()
                },
                ValidationError::HoldingsLabelMismatch {
                    field: "holdings.symbols.token1",
                    expected: "WETH".to_string(),
                    actual: "USDC".to_string()
                },
            ]
        );

        let mut record = sample_record();
        record.holdings.addresses = Some(TokenPair::new(
            record.token1.address.clone(),
            record.token1.address.clone(),
        ));
        assert!(matches!(
            validate(&record, &config()),
            Err(ValidationError::HoldingsLabelMismatch {
                field: "holdings.addresses.token0",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_amounts() {
        let mut record = sample_record();
        record.fees_uncollected.token1 = dec!(-0.01);
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::NegativeAmount {
                field: "fees_uncollected.token1",
                value: dec!(-0.01)
            })
        );

        let mut record = sample_record();
        record.holdings.vault_idle.token0 = dec!(-1);
        record.holdings.totals.token0 = dec!(2);
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::NegativeAmount {
                field: "holdings.vault_idle.token0",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn test_gauge_flags() {
        let mut record = sample_record();
        record.has_gauge = Some(true);
        assert!(matches!(
            validate(&record, &config()),
            Err(ValidationError::GaugeFlagMismatch { has_gauge: true, .. })
        ));

        let mut record = sample_record();
        record.staked = Some(true);
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::StakedWithoutGauge)
        );

        let mut record = sample_record();
        record.gauge = Address::new("0x00000000000000000000000000000000000000c1");
        record.staked = Some(true);
        record.sync_gauge_flags();
        assert_eq!(record.position_location, Some(PositionLocation::Gauge));
        assert!(validate(&record, &config()).is_ok());

        record.position_location = Some(PositionLocation::Pool);
        assert_eq!(
            validate(&record, &config()),
            Err(ValidationError::PositionLocationMismatch {
                actual: PositionLocation::Pool,
                expected: PositionLocation::Gauge
            })
        );
    }
}
