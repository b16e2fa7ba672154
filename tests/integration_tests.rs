use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;
use validator::Validate;
use wellknown_catalog::models::CatalogEntry;
use wellknown_catalog::processors::CatalogBuilder;
use wellknown_catalog::readers::CatalogReader;
use wellknown_catalog::utils::catalog_filename_at;
use wellknown_catalog::writers::CatalogWriter;
use wellknown_catalog::ProcessingError;

const STAR_HEADER: &str = "StarID,HIP,HD,HR,Gliese,BayerFlamsteed,ProperName,RA,Dec,Distance,PMRA,PMDec,RV,Mag,AbsMag,Spectrum,ColorIndex";
const DSO_HEADER: &str = "ra,dec,type,const,mag,name,rarad,decrad,id,r1,r2,angle,dso_source,id1,cat1,id2,cat2,dupid,dupcat,display_mag";

fn write_source(dir: &Path, name: &str, header: &str, rows: &[&str]) -> std::path::PathBuf {
    let mut text = String::from(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let path = dir.join(name);
    std::fs::write(&path, text).expect("Failed to write source table");
    path
}

#[test]
fn test_sirius_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let stars = write_source(
        temp_dir.path(),
        "hygfull.csv",
        STAR_HEADER,
        &["32263,32349,48915,2491,Gl 244A,9Alp,Sirius,6.75,-16.7,2.6371,-546.01,-1223.08,-7.6,-1.46,1.45,A1V,0.009"],
    );
    let dsos = write_source(temp_dir.path(), "dso.csv", DSO_HEADER, &[]);

    let (entries, report) = CatalogBuilder::new()
        .build(&stars, &dsos, None)
        .unwrap();
    assert_eq!(report.total_entries(), 1);

    let output = temp_dir.path().join("out").join("wellknowndso_test.csv");
    CatalogWriter::new().write_catalog(&output, &entries).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "typ,ra,dec,mag,names\nStar,101.25,-16.7,-1.46,Sirius/Alp/hd48915\n"
    );
}

#[test]
fn test_generated_catalog_reads_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let stars = write_source(
        temp_dir.path(),
        "hygfull.csv",
        STAR_HEADER,
        &[
            "1,,172167,,,3Alp Lyr,Vega,18.615649,38.783692,7.68,,,,0.03,0.58,A0V,-0.001",
            "2,,,,,,Faint Thing,1.0,1.0,,,,,13.5,,,",
            "3,,999999,,,,,1.0,1.0,,,,,16.2,,,",
            "4,,,,,,No Magnitude,1.0,1.0,,,,,,,,",
        ],
    );
    let dsos = write_source(
        temp_dir.path(),
        "dso.csv",
        DSO_HEADER,
        &[
            "3.7903,24.1167,OC,TAU,1.6,Pleiades,,,1,,,,0,45,M,,,,,",
            "12.0,10.0,Gxy,VIR,15.0,,,,2,,,,0,4100,NGC,,,,,",
            "13.0,-20.0,PN,HYA,,,,,3,,,,0,3242,NGC,,,,,",
        ],
    );

    let (entries, report) = CatalogBuilder::new().build(&stars, &dsos, None).unwrap();
    assert_eq!(report.stars.too_faint, 1);
    assert_eq!(report.stars.missing_magnitude, 1);
    assert_eq!(report.out_of_range, 0);
    assert!(entries.iter().all(|e| e.validate().is_ok()));

    let when = chrono::DateTime::parse_from_rfc3339("2022-03-05T07:08:09Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let output = catalog_filename_at(temp_dir.path(), when);
    CatalogWriter::new().write_catalog(&output, &entries).unwrap();
    assert!(output.ends_with("wellknowndso_20220305T070809.csv"));

    let catalog = CatalogReader::new().read_catalog(&output).unwrap();
    assert_eq!(catalog.entries(), entries.as_slice());

    let kinds: Vec<&str> = catalog.entries().iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["OC", "Gxy", "PN", "Star", "Star"]);

    let ngc4100 = catalog.find_by_name("ngc4100").unwrap();
    assert_eq!(ngc4100.magnitude, 13.0);
    assert_eq!(ngc4100.right_ascension, 180.0);
    assert_eq!(catalog.find_by_name("NGC3242").unwrap().magnitude, 4.0);
    assert_eq!(catalog.find_by_name("hd999999").unwrap().magnitude, 16.2);
    assert!(catalog.find_by_name("Faint Thing").is_none());

    let sorted = catalog.sorted();
    let brightest: Vec<&str> = sorted
        .entries()
        .iter()
        .take(2)
        .map(|e| e.primary_name())
        .collect();
    assert_eq!(brightest, vec!["Vega", "Pleiades"]);
}

#[test]
fn test_missing_source_fails_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dsos = write_source(temp_dir.path(), "dso.csv", DSO_HEADER, &[]);

    let result = CatalogBuilder::new().build(&temp_dir.path().join("hygfull.csv"), &dsos, None);
    assert!(matches!(result, Err(ProcessingError::Io(_))));
}

#[test]
fn test_entry_display() {
    let entry = CatalogEntry::new(
        "Star".to_string(),
        101.25,
        -16.7,
        -1.46,
        vec!["Sirius".to_string(), "Alp".to_string()],
    )
    .unwrap();

    assert_eq!(
        entry.to_string(),
        "Star Sirius/Alp (ra=101.2500, dec=-16.7000, mag=-1.46)"
    );
}
