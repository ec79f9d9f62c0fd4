diesel::table! {
    products (id) {
        id -> Int4,
        name -> Varchar,
        image_url -> Varchar,
        deleted -> Bool,
    }
}
