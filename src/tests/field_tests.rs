extern crate std;

use std::string::ToString;

use strum::{EnumCount, IntoEnumIterator};

use crate::{FieldError, InputField, OutputSelection, SpaError, SpaInput};

#[test]
fn keys_round_trip() {
    for field in InputField::iter() {
        let key: &'static str = field.into();
        assert_eq!(key.parse::<InputField>(), Ok(field));
        assert_eq!(field.to_string(), key);
        assert_eq!(field.as_ref(), key);
    }
    assert!("zenith".parse::<InputField>().is_err());
    assert!("Year".parse::<InputField>().is_err());
    assert_eq!(InputField::COUNT, 18);
}

#[test]
fn keys_match_struct_field_names() {
    assert_eq!(InputField::DeltaUt1.as_ref(), "delta_ut1");
    assert_eq!(InputField::DeltaT.as_ref(), "delta_t");
    assert_eq!(InputField::AzmRotation.as_ref(), "azm_rotation");
    assert_eq!(InputField::AtmosRefract.as_ref(), "atmos_refract");
    assert_eq!("delta_ut1".parse::<InputField>(), Ok(InputField::DeltaUt1));
}

#[test]
fn unknown_keys_are_field_errors() {
    let mut input = SpaInput::default();
    assert_eq!(input.set_by_key("zenith", 1.0), Err(FieldError::UnknownField));
    assert_eq!(input.set_by_key("Year", 2000.0), Err(FieldError::UnknownField));
    assert_eq!(input.year, SpaInput::default().year);
}

#[test]
fn set_then_get_each_field() {
    let mut input = SpaInput::default();
    for (index, field) in InputField::iter().enumerate() {
        let value = if field == InputField::Function { 2.0 } else { index as f64 + 1.0 };
        input.set(field, value).unwrap();
        assert_eq!(input.get(field), value, "{field}");
    }
    assert_eq!(input.function, OutputSelection::ZenithAzimuthSun);
    assert_eq!(input.year, 1);
    assert_eq!(input.atmos_refract, 17.0);
}

#[test]
fn defaults_read_through_keys() {
    let input = SpaInput::default();
    assert_eq!(input.get(InputField::Month), 1.0);
    assert_eq!(input.get(InputField::Day), 1.0);
    assert_eq!(input.get(InputField::Function), 3.0);
    assert_eq!(input.get(InputField::Pressure), 0.0);
}

#[test]
fn calendar_fields_need_whole_numbers() {
    let mut input = SpaInput::default();
    assert_eq!(
        input.set(InputField::Month, 2.5),
        Err(FieldError::NotWhole {
            field: InputField::Month,
            value: 2.5
        })
    );
    assert!(input.set(InputField::Year, f64::NAN).is_err());
    assert!(input.set(InputField::Year, 1e12).is_err());
    assert_eq!(input.month, 1);

    // Seconds are fractional.
    input.set_by_key("second", 12.75).unwrap();
    assert_eq!(input.second, 12.75);
}

#[test]
fn unknown_selector_is_rejected() {
    let mut input = SpaInput::default();
    assert_eq!(
        input.set_by_key("function", 9.0),
        Err(FieldError::Selector(SpaError::InvalidFunction(9)))
    );
    assert_eq!(input.function, OutputSelection::All);
    assert_eq!(input.set_by_key("sunrise", 1.0), Err(FieldError::UnknownField));
}
