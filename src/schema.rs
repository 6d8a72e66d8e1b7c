table! {
    guests (id) {
        id -> Int8,
        name -> Varchar,
        created_at -> Nullable<Timestamptz>,
    }
}

table! {
    reservations (id) {
        id -> Int8,
        guest_id -> Nullable<Int8>,
        schedule_id -> Int8,
        value -> Int8,
        reservation_status -> Varchar,
        refund_value -> Int8,
        previous_reservation_id -> Nullable<Int8>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

table! {
    schedules (id) {
        id -> Int8,
        tennis_court_id -> Int8,
        start_date_time -> Timestamp,
        end_date_time -> Timestamp,
        created_at -> Nullable<Timestamptz>,
    }
}

table! {
    tennis_courts (id) {
        id -> Int8,
        name -> Varchar,
        created_at -> Nullable<Timestamptz>,
    }
}

joinable!(reservations -> guests (guest_id));
joinable!(reservations -> schedules (schedule_id));
joinable!(schedules -> tennis_courts (tennis_court_id));

allow_tables_to_appear_in_same_query!(
    guests,
    reservations,
    schedules,
    tennis_courts,
);
