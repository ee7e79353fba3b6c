use hill_crypto::cipher::{Alphabet, Cipher};
use hill_crypto::errors::HillCipherError;

const SPANISH: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";
const HEX: &str = "0123456789ABCDEF";

const HEX_MESSAGE: &str = "F60DFBF641AA19A49D881A85A3F503EFA720097BB62489809A064D7B445A295BEE0665A83A9D686F6F8733736E28859D7C395D57C8A201F2ADCC3DDB58B341785EC2343E3BC667105F3BEA8AB63A03A8DC5C1CBE0E441618C90C19B20A434F3C07B666D4FC8F329D43898303B7579A3E6D94AB3635A683722C7B2309B4A2BCA49BF449D41FC18F764CD42AA0BA41785AD10277C982237F47B6A94C423DAE43DF65CE4E875C2356844C6B36E53C05B41A4B57BA5DA5A4F36A28ED1E574AF9A050F9CE5E1A530FF07F0B7DB27087AFE18B405DB86E80FD708CE6CB3D767E10C4A85C25C40C4AAAD1D59042CEA7EA8444FBC227E2EDE7E930821ACA014D6B44824D189DE2A84DF59A128A596C1DCA6FBEDD4BBA26643D6B854F81F682FAD1C4CCF41E15AC800EC70110B1559EDBF258E79748FBE744A99504877B77ECB08FE402C339865B896D420B64B7B7DF8139ECA3857AE34B4EA61218E9AB1AF0AFC4AAF13E838D8EA7A900560DE0A405C0EBE531F373BE39735339E4BD07E29EFBCD6532D88531D9AECF6771E5D7C9BF10E28EABE64A0B40F15BB0B7A17EFE171D6B46BFD4B49EF010337B65EAFFF1D99CC262B48DB7ED1543B05A737BB4CA48E9219B3659E45A5F0C1C8CD9F075E2BE09465AB95B81496E86688BDBB42741E749BAF5A8CE77F96552E7DFD2585A76772CF661B436936F1CC6";
const HEX_KEY: &str = "06095889993EA8DE0BBA646B61268E5E23E5A8C83BD43F8BF3F0220BC8480947875E6624CC812791A228171F1C62D14024F1";
const HEX_CIPHER_TEXT: &str = "7E6DE032F2CDDDEAC5C438A10E5D3460D100ADAB36F4183AEDF0809FC2D68E3DD8AB4947D1279E667C64EDAECF282ACF1BA14BBA0B696D2570CBE7D522472A5477C2A0389F3FE871D5D681E4A8B84DAFDC0FFDF0E30646FA4FEFEE89D71C18D57C597708A9DE8180BAC22817C6C191F884668AFBBEE37A0954488725BF08EEB07E16F4B9C3655E5E0925065C8FBE0FA05DEE645F0C1F115681AFEFAAF3EA1F8E84A87410AB566C3075A64810ABD0B249451AF36399DD534742FA75014137CE5F27D672DE41DCB534D191CAD3875F86C93101214F75DEB94A9751E12D1E85336B3E0C00FA5666CA5EE74E54AB06B61A5E3DB3EC3A7E606E2A0455FE604B995DFB57AD29ED43717EF06A623EBE6E87FD01FED586B14E038D07472A088C45B66458963201A8C02CF187EB66F3C25CF20C68914FB293C361342C5BB02B6F54E7BBE099D44A873162BBBE099DB6E9B010A6B51D83EA0598A8A4A0ECE7F63AB59DFEF0DCE26BE0BD201594DC37A59A1FE9E8E30FFFD5678684863E168916A1F3BB34590854545BAE537461F83ECB1A8181C556447B1A01FF42CD6494D550CFC8F52AA161637BBA3ECDA4D7AAEE18A90CFE7E2B08868F0D0640E7EF28899984DF495AE88A1ED3EDD3BCA8A19C1BE1199A19B9056AF06A865925E6BC06C564593545CB858F4DBC0C87C36751CF1C1E85F33A13B3271615CA";

// This order-10 hex key has determinant residue 0 modulo 16.
const HEX_SINGULAR_KEY: &str = "92666C703E4135B097C7D2EA9C699C274C4F9442F13D38013F28C1765D3461A52E82261E74EAB8C35D6BA6457DF68830B0E0";

#[test]
fn happy_flow() -> Result<(), HillCipherError> {
    let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;

    let cipher_text = cipher.encrypt("CONSUL", "FORTALEZA")?;
    dbg!(&cipher_text);
    assert_eq!(cipher_text, "KUTÑOB");

    let plain_text = cipher.decrypt(&cipher_text, "FORTALEZA")?;
    assert_eq!(plain_text, "CONSUL");

    Ok(())
}

#[test]
fn spanish_vectors_encrypt_and_round_trip() -> Result<(), HillCipherError> {
    let tests = [
        ("CONSUL", "FORTALEZA", "KUTÑOB"),
        (
            "IBOMBATOMICALLYSOCRATESPHILOSOPHIESANDHYPOTHESESCANTDEFINEHOWIBEDROPPINGTHESEMOCKERY",
            "UNAMFCIENCIASCYS",
            "BUKBMJLUFLZXICÑCQHSKPAOGZKGHDLAGELUÑRLOMUBTVSEÑIMFVÑVÑGRSAQNÑTZÑDSGPZIEDKGJRUKHAVFMP",
        ),
        (
            "LYRICALLYPERFORMARMEDROBBERYFLEEWITHLOTTERYPOSSIBLYTHEYSPOTTEDMEBATTLESCARREDSHOGUNEXPLOSIONWHENMYPENHITSTREMENDOUSULTRAVIOLETSHINEBLINDFORENSICS",
            "ÑOMEGUSTALCORONAVIRUSHELP",
            "GIDPJHLBJEÑVQEAXINMKPÑHOAKUBZTEDYZKVMKIAXLCLPOOECLJXXNHVIBKTXÑRMPÑÑNRAQÑFQXOLTLENWOIMROSIVENNFOUSDZWKSMFOVVTZPLCMRZOXAXYBNDLQDLLAAPHXÑROPYQJKEDZJ",
        ),
    ];

    let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;
    for (message, key, want) in tests {
        let cipher_text = cipher.encrypt(message, key)?;
        assert_eq!(cipher_text, want, "encrypt with key {:?}", key);
        assert_eq!(
            cipher.decrypt(&cipher_text, key)?,
            message,
            "round trip with key {:?}",
            key
        );
    }
    Ok(())
}

#[test]
fn hex_vector_with_order_10_key_encrypts() -> Result<(), HillCipherError> {
    let cipher = Cipher::try_with(Alphabet::new(HEX))?;
    assert_eq!(cipher.encrypt(HEX_MESSAGE, HEX_KEY)?, HEX_CIPHER_TEXT);
    Ok(())
}

#[test]
fn singular_order_10_key_is_rejected() -> Result<(), HillCipherError> {
    let cipher = Cipher::try_with(Alphabet::new(HEX))?;
    assert!(matches!(
        cipher.encrypt(HEX_MESSAGE, HEX_SINGULAR_KEY),
        Err(HillCipherError::InvalidKey(_))
    ));
    Ok(())
}

// Inverting an order-10 matrix through the adjugate evaluates thousands of
// factorial-cost determinants; that takes minutes in unoptimized builds. Run
// with --ignored (ideally under --release) to exercise the fixture.
#[test]
#[ignore]
fn hex_vector_with_order_10_key_decrypts() -> Result<(), HillCipherError> {
    let cipher = Cipher::try_with(Alphabet::new(HEX))?;
    assert_eq!(cipher.decrypt(HEX_CIPHER_TEXT, HEX_KEY)?, HEX_MESSAGE);
    Ok(())
}

#[test]
fn generated_keys_round_trip() -> Result<(), HillCipherError> {
    let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;

    for order in [2, 3, 4] {
        let key = cipher.generate_key(order)?;
        assert_eq!(key.chars().count(), order * order);

        // twelve symbols align with every tested order
        let message = "ATACARALALBA";
        let cipher_text = cipher.encrypt(message, &key)?;
        assert_eq!(
            cipher.decrypt(&cipher_text, &key)?,
            message,
            "key {:?}",
            key
        );
    }
    Ok(())
}
