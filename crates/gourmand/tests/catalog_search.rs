use std::fs;
use std::path::Path;
use std::sync::Arc;

use gourmand::catalog::{
    CatalogTable, CsvDataSource, CsvRestaurantRepository, DataLoadError, RestaurantRepository,
    RowError,
};
use gourmand::domain::{Cuisine, Distance, Price, Rating, ValidationError};
use gourmand::search::{SearchCriteria, SearchService, MAX_RESULTS};

fn bundled_service() -> SearchService<CsvRestaurantRepository> {
    let repository =
        CsvRestaurantRepository::load(&CsvDataSource::bundled()).expect("bundled catalog loads");
    SearchService::new(Arc::new(repository))
}

fn write_catalog(dir: &Path, cuisines: &str, restaurants: &str) {
    fs::write(dir.join("cuisines.csv"), cuisines).expect("write cuisines");
    fs::write(dir.join("restaurants.csv"), restaurants).expect("write restaurants");
}

fn load_dir(dir: &Path) -> Result<CsvRestaurantRepository, DataLoadError> {
    let source = CsvDataSource::from_directory(dir)?;
    CsvRestaurantRepository::load(&source)
}

#[test]
fn bundled_catalog_is_complete_and_consistent() {
    let service = bundled_service();
    let repository = service.repository();

    assert_eq!(repository.find_all_cuisines().len(), 19);
    assert_eq!(repository.find_all().len(), 80);
    assert_eq!(repository.find_all_cuisines()[0].name(), "American");
    assert_eq!(repository.find_all_cuisines()[18].name(), "Other");

    for restaurant in repository.find_all() {
        assert!(repository
            .find_all_cuisines()
            .iter()
            .any(|cuisine| Arc::ptr_eq(cuisine, restaurant.cuisine())));
    }
}

#[test]
fn bundled_search_returns_ranked_top_five() {
    let service = bundled_service();
    let results = service.search(&SearchCriteria::default());

    assert_eq!(results.len(), MAX_RESULTS);
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = a.distance < b.distance
            || (a.distance == b.distance && a.rating > b.rating)
            || (a.distance == b.distance && a.rating == b.rating && a.price <= b.price);
        assert!(ordered, "{a:?} should rank before {b:?}");
    }
}

#[test]
fn bundled_search_honours_every_constraint() {
    let service = bundled_service();
    let criteria = SearchCriteria::builder()
        .min_rating(Rating::new(3).unwrap())
        .max_distance(Distance::new(6.0).unwrap())
        .max_price(Price::new(35.0).unwrap())
        .build();

    let results = service.search(&criteria);
    assert!(!results.is_empty());
    assert!(results.len() <= MAX_RESULTS);
    assert!(results
        .iter()
        .all(|r| r.rating >= 3 && r.distance <= 6.0 && r.price <= 35.0));
}

#[test]
fn cuisine_search_matches_catalog_names() {
    let service = bundled_service();
    let criteria = SearchCriteria::builder()
        .cuisine(Cuisine::new("ITALIAN").unwrap())
        .build();

    let results = service.search(&criteria);
    assert!(results.iter().all(|r| r.cuisine == "Italian"));
}

#[test]
fn directory_catalog_round_trips_file_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(
        dir.path(),
        "id,name\n3,Chinese\n1,Italian\n2,American\n",
        "name,customer_rating,distance,price,cuisine_id\n\
         Far Trattoria,5,8.0,20.0,1\n\
         Corner Pizza,5,1.0,45.0,1\n\
         Pasta Stop,2,1.5,15.0,1\n",
    );

    let repository = load_dir(dir.path()).expect("catalog loads");
    let cuisines = repository
        .find_all_cuisines()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>();
    assert_eq!(cuisines, ["Chinese", "Italian", "American"]);

    let names = repository
        .find_all()
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Far Trattoria", "Corner Pizza", "Pasta Stop"]);

    let service = SearchService::new(Arc::new(repository));
    let ranked = service
        .search(&SearchCriteria::default())
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(ranked, ["Corner Pizza", "Pasta Stop", "Far Trattoria"]);
}

#[test]
fn unresolved_cuisine_id_fails_the_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(
        dir.path(),
        "id,name\n1,Italian\n",
        "name,customer_rating,distance,price,cuisine_id\nBad Restaurant,4,1.0,20.0,999\n",
    );

    match load_dir(dir.path()).expect_err("unknown cuisine id") {
        DataLoadError::InvalidRow {
            table: CatalogTable::Restaurants,
            source: RowError::Validation(ValidationError::Missing { field }),
            ..
        } => assert_eq!(field, "Cuisine"),
        other => panic!("expected missing cuisine, got {other:?}"),
    }
}

#[test]
fn empty_tables_fail_the_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path(), "", "name,customer_rating,distance,price,cuisine_id\n");
    let err = load_dir(dir.path()).expect_err("empty cuisines");
    assert!(err.to_string().contains("CSV data is empty"));

    write_catalog(dir.path(), "id,name\n1,Italian\n", "");
    let err = load_dir(dir.path()).expect_err("empty restaurants");
    assert!(matches!(
        err,
        DataLoadError::Empty {
            table: CatalogTable::Restaurants
        }
    ));
}
