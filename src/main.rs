use zukaku_rs::{SheetIndex, ZukakuError};

fn main() -> Result<(), ZukakuError> {
    let mut index = SheetIndex::new(9)?;

    let zone = index.zone();
    println!("Zone {} ({})", zone.number, zone.crs_code());
    println!("1:50000 sheets: {}", index.level1().len());

    let sheet = index.level1().find_by_code("09AA")?;
    println!("{}: center ({}, {})", sheet.code, sheet.lat(), sheet.lon());

    let count = index.select_level1("09AA")?.len();
    println!("1:5000 sheets under 09AA: {}", count);

    let quadrants = index.select_level2("09AA00")?;
    for sheet in quadrants.iter() {
        if let Some(corners) = sheet.geo_corners {
            println!(
                "{}: NW ({:.6}, {:.6}) SE ({:.6}, {:.6})",
                sheet.code,
                corners.nw.y(),
                corners.nw.x(),
                corners.se.y(),
                corners.se.x()
            );
        }
    }

    Ok(())
}
