//! Basic decoding example

use mrz_core::decode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("MRZ Decoding Example\n");

    // Two printed lines of a passport, joined without separators
    let lines = [
        "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
        "L898902C<3UTO6908061F9406236ZE184226B<<<<<14",
    ];
    let text = lines.concat();

    let doc = decode(&text)?;

    println!("Variant:         {}", doc.variant().description());
    println!("Document type:   {}", doc.document_type().unwrap_or("-"));
    println!("Issuer:          {} ({})", doc.issuer_name(), doc.issuer_code());
    println!("Surname:         {}", doc.surname());
    println!("Given names:     {}", doc.given_names());
    println!("Document number: {}", doc.document_number());
    println!("Nationality:     {} ({})", doc.nationality_name(), doc.nationality_code());
    println!("Birth date:      {}", doc.birth_date());
    println!("Sex:             {}", doc.sex());
    println!("Expiry date:     {}", doc.expiry_date());
    println!("Personal number: {}", doc.personal_number());

    Ok(())
}
