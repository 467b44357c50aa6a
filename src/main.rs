use ideographset_bakery::{ideographset_table, UcdDirectory, UCD_DIRECTORY};

fn main()
{
    let ucd = UcdDirectory::new(UCD_DIRECTORY);

    if let Err(e) = ideographset_table!("ideographset", &ucd) {
        eprintln!("IDEOGRAPHSET: {}", e);
        std::process::exit(1);
    }
}
