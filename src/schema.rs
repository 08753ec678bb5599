diesel::table! {
    appointments (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        phone -> Text,
        doctor -> Text,
        date -> Date,
        time -> Text,
        message -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    contact_messages (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        subject -> Text,
        message -> Text,
        department -> Text,
        is_urgent -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    doctors (id) {
        id -> Integer,
        name -> Text,
        specialty -> Text,
        description -> Text,
        image -> Text,
        rating -> Double,
        reviews -> Integer,
        availability -> Text,
        likes -> Integer,
    }
}

diesel::table! {
    services (id) {
        id -> Integer,
        name -> Text,
        icon -> Text,
        description -> Text,
        price_range -> Text,
        likes -> Integer,
        long_description -> Nullable<Text>,
        procedures -> Nullable<Text>,
        duration -> Nullable<Text>,
        preparation -> Nullable<Text>,
        recovery_time -> Nullable<Text>,
        success_rate -> Nullable<Text>,
        faqs -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(appointments, contact_messages, doctors, services,);
