//! Tests for the customer format provider and the delegation protocol
//!
//! These tests verify that:
//! - The capability query answers for the customer type and defers otherwise
//! - Composite codes work only through a provider
//! - Unknown codes fall back to the customer's own dispatch unchanged
//! - A provider is shareable across threads

use std::any::TypeId;
use std::sync::Arc;
use std::thread;

use customer::prelude::*;

fn richter() -> Customer {
    Customer::new(
        "Jeffrey Richter",
        "+1 (425) 555-0100",
        Decimal::from(1_000_000),
    )
    .expect("valid customer")
}

// =============================================================================
// Capability Query Tests
// =============================================================================

mod capability_tests {
    use super::*;

    #[test]
    fn test_provider_supplies_a_renderer_for_customers() {
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert!(provider.formatter_for(TypeId::of::<Customer>()).is_some());
    }

    #[test]
    fn test_provider_defers_other_types_to_its_parent() {
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert!(provider.formatter_for(TypeId::of::<u32>()).is_none());
    }

    #[test]
    fn test_plain_locale_never_supplies_a_renderer() {
        assert!(
            Locale::EnUs
                .formatter_for(TypeId::of::<Customer>())
                .is_none()
        );
    }
}

// =============================================================================
// Composite Code Tests
// =============================================================================

mod composite_tests {
    use super::*;

    #[test]
    fn test_np_through_provider_succeeds() {
        let customer = richter();
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert_eq!(
            customer.render_as_with("NP", &provider).expect("NP"),
            "Name: Jeffrey Richter, Phone: +1 (425) 555-0100"
        );
    }

    #[test]
    fn test_nr_through_provider_follows_the_locale() {
        let customer = richter();

        let us = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert_eq!(
            customer.render_as_with("NR", &us).expect("NR"),
            "Name: Jeffrey Richter, Revenue: $1,000,000.00"
        );

        let uk = CustomerFormatProvider::with_parent(Locale::EnGb);
        assert_eq!(
            customer.render_as_with("NR", &uk).expect("NR"),
            "Name: Jeffrey Richter, Revenue: £1,000,000.00"
        );
    }

    #[test]
    fn test_composite_codes_are_case_insensitive() {
        let customer = richter();
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert_eq!(
            customer.render_as_with("np", &provider).expect("np"),
            customer.render_as_with("NP", &provider).expect("NP")
        );
    }
}

// =============================================================================
// Fallback Tests
// =============================================================================

mod fallback_tests {
    use super::*;

    #[test]
    fn test_entity_codes_render_identically_with_and_without_provider() {
        let customer = richter();
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);

        for code in ["N", "P", "R", "G", "NPR", ""] {
            let direct = customer.render_as(code).expect("supported code");
            let through_provider = customer
                .render_as_with(code, &provider)
                .expect("supported code");
            assert_eq!(direct, through_provider, "code {:?} diverged", code);
        }
    }

    #[test]
    fn test_unsupported_code_fails_identically_through_both_paths() {
        let customer = richter();
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);

        let direct = customer.render_as("XYZ").unwrap_err();
        let through_provider = customer.render_as_with("XYZ", &provider).unwrap_err();
        assert_eq!(direct.to_string(), through_provider.to_string());
    }

    #[test]
    fn test_general_format_through_provider() {
        let customer = richter();
        let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
        assert_eq!(
            customer.render_with(&provider).expect("general"),
            "Name: Jeffrey Richter, Phone: +1 (425) 555-0100, Revenue: $1,000,000.00"
        );
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_default_provider_captures_the_ambient_locale_at_construction() {
        let customer = richter();

        let provider = {
            let _guard = ScopedLocale::enter(Locale::EnGb);
            CustomerFormatProvider::new()
        };

        // The guard is gone, yet the provider keeps the locale it saw when built
        assert_eq!(
            customer.render_as_with("NR", &provider).expect("NR"),
            "Name: Jeffrey Richter, Revenue: £1,000,000.00"
        );
    }

    #[test]
    fn test_provider_can_wrap_another_provider() {
        let customer = richter();
        let inner = CustomerFormatProvider::with_parent(Locale::EnGb);
        let outer = CustomerFormatProvider::with_parent(inner);
        assert_eq!(
            customer.render_as_with("NR", &outer).expect("NR"),
            "Name: Jeffrey Richter, Revenue: £1,000,000.00"
        );
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_one_provider_shared_across_threads() {
        let provider = Arc::new(CustomerFormatProvider::with_parent(Locale::EnUs));
        let customer = Arc::new(richter());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                let customer = Arc::clone(&customer);
                thread::spawn(move || {
                    customer
                        .render_as_with("NP", provider.as_ref())
                        .expect("NP")
                })
            })
            .collect();

        for handle in handles {
            let text = handle.join().expect("render thread");
            assert_eq!(text, "Name: Jeffrey Richter, Phone: +1 (425) 555-0100");
        }
    }

    #[test]
    fn test_ambient_locale_is_per_thread() {
        let customer = richter();
        let _guard = ScopedLocale::enter(Locale::EnGb);

        // A fresh thread still sees the default ambient locale
        let customer_for_thread = customer.clone();
        let from_thread = thread::spawn(move || {
            customer_for_thread.render_as("R").expect("revenue")
        })
        .join()
        .expect("render thread");

        assert_eq!(from_thread, "Revenue: $1,000,000.00");
        assert_eq!(
            customer.render_as("R").expect("revenue"),
            "Revenue: £1,000,000.00"
        );
    }
}
