use garage_core::{CountPolicy, Garage, GarageConfig, GarageError, Slot, VehicleClass};

#[test]
fn release_van_by_leftmost_index_clears_triple() {
    let mut g = Garage::new();
    assert_eq!(g.allocate(VehicleClass::Van).unwrap(), 0);

    assert_eq!(g.release(VehicleClass::Van, Some(0)).unwrap(), 0);
    assert!(g.slots()[0..3].iter().all(|s| *s == Slot::Empty));
    assert_eq!(g.counts().vans, 0);
}

#[test]
fn release_without_spot_takes_first_occurrence() {
    let mut g = Garage::new();
    g.allocate(VehicleClass::Motorcycle).unwrap();
    g.allocate(VehicleClass::Car).unwrap();
    g.allocate(VehicleClass::Car).unwrap();

    assert_eq!(g.release(VehicleClass::Car, None).unwrap(), 1);
    assert_eq!(g.slots()[1], Slot::Empty);
    assert_eq!(g.slots()[2], Slot::Car);
    assert_eq!(g.counts().cars, 1);
}

#[test]
fn release_by_spot_only_matches_that_spot() {
    let mut g = Garage::new();
    for _ in 0..3 {
        g.allocate(VehicleClass::Car).unwrap();
    }
    assert_eq!(g.release(VehicleClass::Car, Some(2)).unwrap(), 2);
    assert_eq!(g.occupied_by(VehicleClass::Car), vec![0, 1]);
}

#[test]
fn release_car_from_motorcycle_spot_is_not_found() {
    let mut g = Garage::with_config(GarageConfig::strict());
    for _ in 0..5 {
        g.allocate(VehicleClass::Car).unwrap();
    }
    assert_eq!(g.allocate(VehicleClass::Motorcycle).unwrap(), 5);

    assert_eq!(
        g.release(VehicleClass::Car, Some(5)),
        Err(GarageError::NotFound {
            class: VehicleClass::Car,
            spot: Some(5)
        })
    );
    assert_eq!(g.slots()[5], Slot::Motorcycle);
    assert_eq!(g.counts().cars, 5);
}

#[test]
fn legacy_policy_decrements_on_spot_targeted_miss() {
    let mut g = Garage::new();
    for _ in 0..5 {
        g.allocate(VehicleClass::Car).unwrap();
    }
    g.allocate(VehicleClass::Motorcycle).unwrap();

    assert_eq!(
        g.release(VehicleClass::Car, Some(5)),
        Err(GarageError::NotFound {
            class: VehicleClass::Car,
            spot: Some(5)
        })
    );
    assert_eq!(g.slots()[5], Slot::Motorcycle);
    assert_eq!(g.counts().cars, 4);
    assert_eq!(g.counts().motorcycles, 1);
}

#[test]
fn legacy_policy_decrements_on_failed_release() {
    let mut g = Garage::new();
    assert_eq!(g.config().count_policy, CountPolicy::Legacy);

    assert_eq!(
        g.release(VehicleClass::Car, None),
        Err(GarageError::NotFound {
            class: VehicleClass::Car,
            spot: None
        })
    );
    assert_eq!(g.counts().cars, -1);
    assert_eq!(g.counts().motorcycles, 0);
    assert_eq!(g.counts().vans, 0);
}

#[test]
fn strict_policy_keeps_counter_on_failed_release() {
    let mut g = Garage::with_config(GarageConfig::strict());
    assert!(g.release(VehicleClass::Car, None).is_err());
    assert_eq!(g.counts().cars, 0);

    g.allocate(VehicleClass::Car).unwrap();
    g.release(VehicleClass::Car, None).unwrap();
    assert_eq!(g.counts().cars, 0);
}

#[test]
fn van_body_index_is_not_a_release_handle() {
    let mut g = Garage::with_config(GarageConfig::strict());
    g.allocate(VehicleClass::Car).unwrap();
    g.allocate(VehicleClass::Van).unwrap();
    let before = *g.slots();

    for body in [2, 3] {
        assert!(matches!(
            g.release(VehicleClass::Van, Some(body)),
            Err(GarageError::NotFound { .. })
        ));
    }
    assert_eq!(*g.slots(), before);
    assert_eq!(g.counts().vans, 1);
}

#[test]
fn spot_past_capacity_is_not_found() {
    let mut g = Garage::with_config(GarageConfig::strict());
    g.allocate(VehicleClass::Car).unwrap();
    assert!(g.release(VehicleClass::Car, Some(42)).is_err());
    assert_eq!(g.counts().cars, 1);
}

#[test]
fn unknown_class_name_touches_nothing() {
    let mut g = Garage::new();
    g.allocate(VehicleClass::Car).unwrap();

    assert_eq!(
        g.release_named("truck", None),
        Err(GarageError::InvalidClass("truck".into()))
    );
    assert_eq!(g.counts().cars, 1);
    assert_eq!(g.slots()[0], Slot::Car);

    assert_eq!(g.release_named("Car", None).unwrap(), 0);
    assert_eq!(g.counts().cars, 0);
}
