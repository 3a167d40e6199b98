//! Validates one password and prints which rules it breaks.
//!
//! ```sh
//! cargo run --example validate -- 'MyPassw0rd'
//! ```

use pwd_rules::{
    FailureKind, FailureQuery, InvalidLength, MissingDigit, MissingLowercase, MissingUppercase,
    validate_password,
};
use secrecy::SecretString;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "#".to_string());
    let password = SecretString::new(input.into());

    let result = validate_password(&password);
    let report = match &result {
        Ok(()) => {
            println!("Done");
            return;
        }
        Err(report) => report,
    };

    print!("{report}");
    println!("------------");

    for kind in FailureKind::ALL {
        if !result.is_kind(kind) {
            continue;
        }
        println!("custom : {kind}");
        let field = match kind {
            FailureKind::InvalidLength => result
                .extract::<InvalidLength>()
                .map(|p| p.actual_length.to_string()),
            FailureKind::MissingLowercase => result
                .extract::<MissingLowercase>()
                .map(|p| p.description.to_string()),
            FailureKind::MissingUppercase => result
                .extract::<MissingUppercase>()
                .map(|p| p.description.to_string()),
            FailureKind::MissingDigit => result
                .extract::<MissingDigit>()
                .map(|p| p.description.to_string()),
        };
        if let Some(field) = field {
            println!("\t---> {field}");
        }
    }
    println!("Bad Password");
}
