use time::macros::datetime;

use crate::helpers::load_app_settings_for_testing;
use crate::test_case::{TestCase, create_skin_analysis};

#[tokio::test]
#[ignore]
async fn get_analysis_returns_stored_fields() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;
    let analysis = create_skin_analysis("a1", "u1", datetime!(2024-03-15 10:30:00 UTC));
    test_case.insert_skin_analysis(&analysis).await;

    let response = test_case.get_analysis("a1").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["skinAge"], 28);
    assert_eq!(body["foreheadWrinkle"], 10);
    assert_eq!(body["foreheadPigmentation"], 20);
    assert_eq!(body["glabellaWrinkle"], 30);
    assert_eq!(body["lefteyeWrinkle"], 40);
    assert_eq!(body["righteyeWrinkle"], 50);
    assert_eq!(body["leftcheekPigmentation"], 60);
    assert_eq!(body["leftcheekPore"], 70);
    assert_eq!(body["rightcheekPigmentation"], 80);
    assert_eq!(body["rightcheekPore"], 90);
    assert_eq!(body["lipDryness"], 15);
    assert_eq!(body["jawlineSagging"], 25);
    assert_eq!(body["totalWrinkle"], 35);
    assert_eq!(body["totalPigmentation"], 45);
    assert_eq!(body["totalPore"], 55);
    assert_eq!(body["imageUrls"][0], "https://images.example.com/a1/front.jpg");
    assert_eq!(body["createdAt"], "2024-03-15T10:30:00Z");

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_with_unknown_id_returns_not_found() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;

    let response = test_case.get_analysis("unknown").await;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_dates_are_unique_and_newest_first() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;
    // 同じ日に2件の分析結果を登録しても、その日付は1回だけ返される
    for (analysis_id, created_at) in [
        ("a1", datetime!(2024-03-15 10:30:00 UTC)),
        ("a2", datetime!(2024-03-15 18:00:00 UTC)),
        ("a3", datetime!(2024-03-17 09:00:00 UTC)),
    ] {
        let analysis = create_skin_analysis(analysis_id, "u1", created_at);
        test_case.insert_skin_analysis(&analysis).await;
    }

    let response = test_case.get_analysis_dates("u1").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!(["2024-03-17", "2024-03-15"]));

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_dates_with_unknown_user_returns_empty_list() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;

    let response = test_case.get_analysis_dates("unknown").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_by_date_uses_half_open_interval() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;
    // 前日の終了間際と指定日の開始時刻ちょうどの分析結果を登録
    let previous_day = create_skin_analysis("a1", "u1", datetime!(2024-03-14 23:59:59.999 UTC));
    let start_of_day = create_skin_analysis("a2", "u1", datetime!(2024-03-15 00:00:00 UTC));
    test_case.insert_skin_analysis(&previous_day).await;
    test_case.insert_skin_analysis(&start_of_day).await;

    // 指定日の開始時刻ちょうどの分析結果だけが該当する
    let response = test_case.get_analysis_by_date("u1", "2024-03-15").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["createdAt"], "2024-03-15T00:00:00Z");

    // 翌日にはどの分析結果も該当しない
    let response = test_case.get_analysis_by_date("u1", "2024-03-16").await;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_by_date_returns_latest_analysis_in_the_date() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;
    let morning = create_skin_analysis("a1", "u1", datetime!(2024-03-15 10:30:00 UTC));
    let evening = create_skin_analysis("a2", "u1", datetime!(2024-03-15 18:00:00 UTC));
    test_case.insert_skin_analysis(&morning).await;
    test_case.insert_skin_analysis(&evening).await;

    let response = test_case.get_analysis_by_date("u1", "2024-03-15").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["createdAt"], "2024-03-15T18:00:00Z");

    test_case.end().await;
}

#[tokio::test]
#[ignore]
async fn get_analysis_by_date_with_malformed_date_returns_bad_request() {
    let test_case = TestCase::begin(load_app_settings_for_testing()).await;

    let response = test_case.get_analysis_by_date("u1", "not-a-date").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    test_case.end().await;
}
