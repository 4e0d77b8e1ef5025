use anyhow::Result;
use restyle::Restyle;
use std::fs;
use tempfile::TempDir;

fn page(n: usize) -> String {
    format!(
        r#"export default function Page{n}() {{
  return (
    <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
      <h2 className="text-2xl font-bold">Page {n}</h2>
      <div className="grid grid-cols-3 gap-6">
        <button className="px-6 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700">
          Delete
        </button>
      </div>
    </div>
  );
}}
"#
    )
}

fn setup(temp_dir: &TempDir, count: usize) -> Result<()> {
    let pages = temp_dir.path().join("src/pages");
    let mobile = pages.join("mobile");
    fs::create_dir_all(&mobile)?;

    for n in 0..count {
        fs::write(pages.join(format!("Page{:02}.tsx", n)), page(n))?;
        fs::write(mobile.join(format!("Page{:02}.tsx", n)), page(n))?;
    }

    Ok(())
}

#[test]
fn test_parallel_run_matches_sequential_report() -> Result<()> {
    let seq_dir = TempDir::new()?;
    let par_dir = TempDir::new()?;
    setup(&seq_dir, 12)?;
    setup(&par_dir, 12)?;

    let sequential = Restyle::new(seq_dir.path())?.run(false, false)?;
    let parallel = Restyle::new(par_dir.path())?.run(false, true)?;

    assert_eq!(sequential.summary, parallel.summary);
    assert_eq!(sequential.outcomes.len(), parallel.outcomes.len());

    // Outcome order is the walker's deterministic order in both modes.
    for (a, b) in sequential.outcomes.iter().zip(parallel.outcomes.iter()) {
        assert_eq!(
            a.path().strip_prefix(seq_dir.path())?,
            b.path().strip_prefix(par_dir.path())?
        );
    }

    Ok(())
}

#[test]
fn test_parallel_run_writes_every_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup(&temp_dir, 8)?;

    let report = Restyle::new(temp_dir.path())?.run(false, true)?;
    assert_eq!(report.summary.files_discovered, 16);
    assert_eq!(report.summary.files_changed, 16);

    for n in 0..8 {
        let content = fs::read_to_string(
            temp_dir.path().join(format!("src/pages/Page{:02}.tsx", n)),
        )?;
        assert!(content.contains("container-responsive"));
        assert!(content.contains("heading-2-responsive"));
        assert!(content.contains("grid-responsive-3"));
        assert!(content.contains("btn-danger-responsive"));
    }

    Ok(())
}
