//! Built-in example text.

/// Sample text that exercises every built-in claim signature
pub const EXAMPLE_TEXT: &str = "Deutschland hat 83 Millionen Einwohner und ist das bevölkerungsreichste Land der EU. \
Die Arbeitslosenquote liegt bei 3,5% (Stand 2023). 

Berlin hat mit seinen 3,7 Millionen Einwohnern mehr Bewohner als Hamburg und München zusammen, \
die gemeinsam nur auf etwa 3,4 Millionen kommen.

Die deutsche Wirtschaft wuchs 2019 um 10% - ein Rekordwachstum seit der Wiedervereinigung.";
