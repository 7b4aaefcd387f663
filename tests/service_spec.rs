use std::sync::Arc;

use chrono::{Duration, Utc};
use fleet_rental::models::{Car, CarCategory, Customer};
use fleet_rental::service::{pricing, RentalError, RentalService};
use fleet_rental::store::MemoryStore;
use uuid::Uuid;

fn test_car(name: &str, available: bool) -> Car {
    Car {
        id: Uuid::new_v4(),
        name: name.to_string(),
        available,
        gas_available: true,
        release_year: 2020,
    }
}

fn test_category(car_ids: Vec<Uuid>, price: f64) -> CarCategory {
    CarCategory {
        id: Uuid::new_v4(),
        name: "Sedan".to_string(),
        car_ids,
        price,
    }
}

fn test_customer(age: u8) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: "Bruno Santos".to_string(),
        age,
    }
}

fn setup(cars: Vec<Car>) -> (RentalService, Arc<MemoryStore<Car>>) {
    let store = Arc::new(MemoryStore::new(cars));
    (RentalService::new(store.clone()), store)
}

mod get_available_car {
    use super::*;

    #[tokio::test]
    async fn picks_the_first_matching_car_in_store_order() {
        let outside = test_car("Kwid", true);
        let first = test_car("Onix", true);
        let second = test_car("Gol", true);
        let category = test_category(vec![second.id, first.id], 50.0);
        let (service, _) = setup(vec![outside, first.clone(), second]);

        let selected = service.get_available_car(&category).await.unwrap();

        // Store enumeration order wins, not the order of ids in the category.
        assert_eq!(selected, Some(first));
    }

    #[tokio::test]
    async fn skips_unavailable_cars() {
        let taken = test_car("Onix", false);
        let free = test_car("Gol", true);
        let category = test_category(vec![taken.id, free.id], 50.0);
        let (service, _) = setup(vec![taken, free.clone()]);

        let selected = service.get_available_car(&category).await.unwrap();

        assert_eq!(selected, Some(free));
    }

    #[tokio::test]
    async fn returns_none_when_nothing_qualifies() {
        let taken = test_car("Onix", false);
        let category = test_category(vec![taken.id, Uuid::new_v4()], 50.0);
        let (service, _) = setup(vec![taken]);

        let selected = service.get_available_car(&category).await.unwrap();

        assert!(selected.is_none());
    }

    #[tokio::test]
    async fn does_not_mutate_the_store() {
        let car = test_car("Onix", true);
        let category = test_category(vec![car.id], 50.0);
        let (service, store) = setup(vec![car.clone()]);

        service.get_available_car(&category).await.unwrap();

        assert_eq!(store.snapshot(), vec![car]);
    }
}

mod pricing_rules {
    use super::*;

    #[tokio::test]
    async fn charges_the_calibrated_amounts() {
        let (service, _) = setup(vec![]);
        let category = test_category(vec![], 37.6);

        let adult = service
            .calculate_final_price(&test_customer(50), &category, 5)
            .unwrap();
        assert_eq!(adult, "R$ 244,40");

        let young = service
            .calculate_final_price(&test_customer(20), &category, 5)
            .unwrap();
        assert_eq!(young, "R$ 206,80");
    }

    #[tokio::test]
    async fn applies_band_factors_at_their_edges() {
        let (service, _) = setup(vec![]);
        let category = test_category(vec![], 100.0);

        for (age, expected) in [
            (18, 110.0),
            (25, 110.0),
            (26, 150.0),
            (30, 150.0),
            (31, 130.0),
            (100, 130.0),
        ] {
            let amount = service
                .calculate_amount(&test_customer(age), &category, 1)
                .unwrap();
            assert!(
                (amount - expected).abs() < 1e-9,
                "age {age}: expected {expected}, got {amount}"
            );
        }
    }

    #[tokio::test]
    async fn rejects_ages_outside_every_band() {
        let (service, _) = setup(vec![]);
        let category = test_category(vec![], 100.0);

        for age in [0, 17, 101] {
            let result = service.calculate_amount(&test_customer(age), &category, 1);
            assert!(matches!(result, Err(RentalError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn rejects_zero_days_and_non_positive_price() {
        let (service, _) = setup(vec![]);

        let zero_days =
            service.calculate_amount(&test_customer(30), &test_category(vec![], 37.6), 0);
        assert!(matches!(zero_days, Err(RentalError::Validation(_))));

        let free_category =
            service.calculate_amount(&test_customer(30), &test_category(vec![], 0.0), 5);
        assert!(matches!(free_category, Err(RentalError::Validation(_))));
    }

    #[test]
    fn age_factor_matches_the_tariff_table() {
        assert_eq!(pricing::age_factor(22), Some(1.1));
        assert_eq!(pricing::age_factor(28), Some(1.5));
        assert_eq!(pricing::age_factor(45), Some(1.3));
        assert_eq!(pricing::age_factor(17), None);
        assert_eq!(pricing::age_factor(101), None);
    }
}

mod rent {
    use super::*;

    #[tokio::test]
    async fn flips_availability_and_persists_it() {
        let car = test_car("Civic", true);
        let category = test_category(vec![car.id], 37.6);
        let (service, store) = setup(vec![car.clone()]);

        let receipt = service
            .rent(&test_customer(20), &category, 5)
            .await
            .unwrap();

        assert_eq!(receipt.car.id, car.id);
        assert!(!receipt.car.available);
        assert_eq!(receipt.amount, "R$ 206,80");

        let persisted = store.snapshot();
        assert_eq!(persisted.len(), 1);
        assert!(!persisted[0].available);
    }

    #[tokio::test]
    async fn due_date_is_number_of_days_from_now() {
        let car = test_car("Civic", true);
        let category = test_category(vec![car.id], 37.6);
        let (service, _) = setup(vec![car]);

        let before = Utc::now() + Duration::days(5);
        let receipt = service
            .rent(&test_customer(30), &category, 5)
            .await
            .unwrap();
        let after = Utc::now() + Duration::days(5);

        assert!(receipt.due_date >= before && receipt.due_date <= after);
    }

    #[tokio::test]
    async fn consecutive_rents_take_distinct_cars() {
        let first = test_car("Onix", true);
        let second = test_car("Gol", true);
        let category = test_category(vec![first.id, second.id], 37.6);
        let (service, _) = setup(vec![first.clone(), second.clone()]);

        let customer = test_customer(35);
        let a = service.rent(&customer, &category, 2).await.unwrap();
        let b = service.rent(&customer, &category, 2).await.unwrap();

        assert_eq!(a.car.id, first.id);
        assert_eq!(b.car.id, second.id);
    }

    #[tokio::test]
    async fn fails_with_no_availability_when_the_category_is_exhausted() {
        let car = test_car("Onix", true);
        let category = test_category(vec![car.id], 37.6);
        let (service, _) = setup(vec![car]);

        service
            .rent(&test_customer(35), &category, 2)
            .await
            .unwrap();

        let result = service.rent(&test_customer(35), &category, 2).await;
        assert!(matches!(result, Err(RentalError::NoAvailability)));
    }

    #[tokio::test]
    async fn leaves_the_store_untouched_when_validation_fails() {
        let car = test_car("Onix", true);
        let category = test_category(vec![car.id], 37.6);
        let (service, store) = setup(vec![car.clone()]);

        // Age outside every tariff band: selection succeeds, pricing fails.
        let result = service.rent(&test_customer(17), &category, 2).await;

        assert!(matches!(result, Err(RentalError::Validation(_))));
        assert_eq!(store.snapshot(), vec![car]);
    }

    #[tokio::test]
    async fn only_mutates_the_selected_car() {
        let rented = test_car("Onix", true);
        let untouched = test_car("Gol", true);
        let category = test_category(vec![rented.id], 37.6);
        let (service, store) = setup(vec![rented.clone(), untouched.clone()]);

        service
            .rent(&test_customer(40), &category, 1)
            .await
            .unwrap();

        let persisted = store.snapshot();
        assert!(!persisted[0].available);
        assert_eq!(persisted[1], untouched);
    }
}
