use crate::{FixedI128, LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD};

mod fixedi128 {

    use super::*;

    #[test]
    fn percent_mul() {
        let value = 1000;
        assert_eq!(
            FixedI128::from_rational(LIQUIDATION_BONUS, LIQUIDATION_PRECISION)
                .unwrap()
                .mul_int(value)
                .unwrap(),
            100
        );
    }

    #[test]
    fn into_inner() {
        let fixed = FixedI128::from_inner(100);
        assert_eq!(fixed.into_inner(), 100);
    }

    #[test]
    fn from_inner() {
        let inner = FixedI128::DENOMINATOR;
        assert_eq!(FixedI128::from_inner(inner), FixedI128::ONE);
    }

    #[test]
    fn from_rational() {
        let fixed = FixedI128::from_rational(1, 2).unwrap();
        assert_eq!(fixed.into_inner(), 500_000_000);

        assert_eq!(FixedI128::from_rational(1, 0), None);
    }

    #[test]
    fn from_percentage() {
        let fixed = FixedI128::from_percentage(LIQUIDATION_THRESHOLD).unwrap();
        assert_eq!(fixed, FixedI128::from_rational(1, 2).unwrap());
    }

    #[test]
    fn to_precision() {
        let price = FixedI128::from_rational(2_000_00000000i128, 100_000_000).unwrap();

        assert_eq!(price.to_precision(7).unwrap(), 20_000_000_000);
        assert_eq!(price.to_precision(0).unwrap(), 2_000);

        let third = FixedI128::from_rational(1, 3).unwrap();
        assert_eq!(third.to_precision(7).unwrap(), 3_333_333);
    }

    #[test]
    fn mul_int() {
        let value = 1000;
        let quarter = FixedI128::from_rational(1, 4).unwrap();

        assert_eq!(quarter.mul_int(value).unwrap(), 250);
    }

    #[test]
    fn recip_mul_int() {
        let value = 1000;
        let fixed = FixedI128::from_rational(7, 8).unwrap();
        // 1000 * 8 / 7 = 8000 / 7 = 1142
        assert_eq!(fixed.recip_mul_int(value).unwrap(), 1142);

        let zero = FixedI128::from_inner(0);
        assert_eq!(zero.recip_mul_int(value), None);
    }

    #[test]
    fn mul_int_then_recip_rounds_down_by_at_most_one() {
        let price = FixedI128::from_rational(1_234_567_89i128, 100_000).unwrap();

        for amount in [0i128, 1, 7, 1_000, 123_456_789, 10_000_000_000] {
            let value = price.mul_int(amount).unwrap();
            let back = price.recip_mul_int(value).unwrap();

            assert!(back <= amount);
            assert!(amount - back <= 1);
        }
    }

    #[test]
    fn ordering() {
        assert!(FixedI128::MAX > FixedI128::ONE);
        assert!(FixedI128::from_rational(999, 1000).unwrap() < FixedI128::ONE);
    }
}
