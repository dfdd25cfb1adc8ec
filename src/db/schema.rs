diesel::table! {
    caterers (caterer_id) {
        caterer_id -> Integer,
        user_id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    meal_options (meal_option_id) {
        meal_option_id -> Integer,
        caterer_id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
        price -> Double,
        category -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    users (user_id) {
        user_id -> Integer,
        username -> Text,
        email -> Text,
        password_hash -> Text,
        role -> Text,
    }
}

diesel::joinable!(caterers -> users (user_id));
diesel::joinable!(meal_options -> caterers (caterer_id));

diesel::allow_tables_to_appear_in_same_query!(caterers, meal_options, users);
