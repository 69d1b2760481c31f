use article_core::{
    Article, ArticleRepository, CreateArticleInput, JsonFileArticleRepository, RepoError,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn input(id: &str, date: &str, tags: &[&str]) -> CreateArticleInput {
    CreateArticleInput {
        id: id.to_string(),
        title: format!("title {id}"),
        date: date.to_string(),
        body: "test body".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn seeded_store() -> (TempDir, JsonFileArticleRepository) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testArticles.json");
    let seed = vec![input("1", "2020-01-01", &["test tag"]).into_article()];
    std::fs::write(&path, serde_json::to_vec(&seed).unwrap()).unwrap();
    (dir, JsonFileArticleRepository::new(path))
}

fn read_file(path: &Path) -> Vec<Article> {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn get_returns_existing_article_and_not_found_for_missing_id() {
    let (_dir, repo) = seeded_store();

    let article = repo.get("1").unwrap();
    assert_eq!(article.id, "1");
    assert_eq!(article.tags, vec!["test tag".to_string()]);

    let err = repo.get("2").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(ref id) if id == "2"));
}

#[test]
fn create_persists_and_rejects_duplicate_id() {
    let (_dir, repo) = seeded_store();
    let new_article = input("2", "2020-01-01", &["test"]);

    repo.create(&new_article).unwrap();
    assert_eq!(repo.get("2").unwrap(), new_article.clone().into_article());

    let err = repo.create(&new_article).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(ref id) if id == "2"));

    let persisted = read_file(repo.path());
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].id, "1");
    assert_eq!(persisted[1].id, "2");
}

#[test]
fn create_rejects_invalid_input_without_touching_file() {
    let (_dir, repo) = seeded_store();
    let before = std::fs::read(repo.path()).unwrap();

    let mut invalid = input("9", "2020-01-01", &[]);
    invalid.title.clear();
    let err = repo.create(&invalid).unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(std::fs::read(repo.path()).unwrap(), before);
}

#[test]
fn create_stores_whitespace_only_title_verbatim() {
    let (_dir, repo) = seeded_store();

    let mut spaced = input("9", "2020-01-01", &[]);
    spaced.title = "   ".to_string();
    repo.create(&spaced).unwrap();

    assert_eq!(repo.get("9").unwrap().title, "   ");
    assert_eq!(read_file(repo.path()).len(), 2);
}

#[test]
fn get_by_date_uses_exact_match_and_returns_empty_when_nothing_matches() {
    let (_dir, repo) = seeded_store();

    let articles = repo.get_by_date("2020-01-01").unwrap();
    assert_eq!(articles.len(), 1);

    let articles = repo.get_by_date("2021-01-01").unwrap();
    assert!(articles.is_empty());

    let articles = repo.get_by_date("2020-01-0").unwrap();
    assert!(articles.is_empty());
}

#[test]
fn get_by_date_preserves_store_order() {
    let (_dir, repo) = seeded_store();
    repo.create(&input("3", "2020-01-01", &[])).unwrap();
    repo.create(&input("2", "2020-01-01", &[])).unwrap();

    let ids: Vec<String> = repo
        .get_by_date("2020-01-01")
        .unwrap()
        .into_iter()
        .map(|article| article.id)
        .collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
}

#[test]
fn missing_file_reads_as_empty_and_first_create_writes_it() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("nested").join("articles.json");
    let repo = JsonFileArticleRepository::new(&path);

    assert!(repo.list().unwrap().is_empty());
    assert!(matches!(repo.get("1"), Err(RepoError::NotFound(_))));

    repo.create(&input("1", "2021-01-01", &["a"])).unwrap();
    assert!(path.exists());
    assert_eq!(read_file(&path).len(), 1);
}

#[test]
fn malformed_file_surfaces_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("articles.json");
    std::fs::write(&path, b"{not json").unwrap();
    let repo = JsonFileArticleRepository::new(&path);

    assert!(matches!(repo.get("1"), Err(RepoError::Json(_))));
    assert!(matches!(repo.get_by_date("2021-01-01"), Err(RepoError::Json(_))));
}

#[test]
fn concurrent_creates_keep_every_distinct_article() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileArticleRepository::new(
        dir.path().join("articles.json"),
    ));

    let handles: Vec<_> = (0..16)
        .map(|idx| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || repo.create(&input(&format!("{idx:02}"), "2021-01-01", &["t"])))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(repo.list().unwrap().len(), 16);
}

#[test]
fn concurrent_duplicate_creates_admit_exactly_one() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileArticleRepository::new(
        dir.path().join("articles.json"),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || repo.create(&input("same", "2021-01-01", &[])))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|err| matches!(err, RepoError::AlreadyExists(_))));
    assert_eq!(repo.list().unwrap().len(), 1);
}
