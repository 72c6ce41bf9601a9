//! Diesel table definitions for the car service.
//!
//! Only car records are stored here. Clients live in the client service
//! and are never persisted alongside a car.

diesel::table! {
    cars (id) {
        id -> Int8,
        client_id -> Nullable<Int8>,
        brand -> Nullable<Text>,
        model -> Nullable<Text>,
        registration -> Nullable<Text>,
        year -> Nullable<Int4>,
    }
}
