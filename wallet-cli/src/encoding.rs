//! Hashing, calldata encoding and decoding tools.

use passport_abi::{
    decode_calldata, encode_function_call, keccak256_hash, parse_parameters, DecodedData,
    InputKind, COMMON_SELECTORS,
};

use crate::{prompt, prompt_or, wait_for_enter};

pub fn handle_encoding_menu() -> Result<(), anyhow::Error> {
    loop {
        println!("\n───────── Encode / decode ─────────");
        println!("[1] Keccak-256 hash + selector");
        println!("[2] Encode function call");
        println!("[3] Decode calldata");
        println!("[4] Common selectors");
        println!("[B] Back");

        let choice = prompt("\nSelect option")?;
        match choice.to_lowercase().as_str() {
            "b" => return Ok(()),
            "1" => {
                let input = prompt("Input (signature text or 0x hex)")?;
                let kind_choice = prompt_or("Input type (utf8/hex)", "utf8")?;
                let kind = if kind_choice.eq_ignore_ascii_case("hex") {
                    InputKind::Hex
                } else {
                    InputKind::Utf8
                };
                match keccak256_hash(&input, kind) {
                    Ok(result) => {
                        println!("Hash:     {}", result.hash);
                        println!("Selector: {}", result.selector);
                    }
                    Err(e) => println!("❌ {e}"),
                }
            }
            "2" => {
                let signature = prompt("Function signature, e.g. transfer(address,uint256)")?;
                let params_json = prompt("Parameters as JSON array (blank for none)")?;
                let result = parse_parameters(&params_json)
                    .and_then(|params| encode_function_call(&signature, &params));
                match result {
                    Ok(calldata) => println!("Calldata: {calldata}"),
                    Err(e) => println!("❌ {e}"),
                }
            }
            "3" => {
                let data = prompt("Calldata (0x...)")?;
                let abi_json = prompt("ABI JSON (blank for basic decode)")?;
                let abi = (!abi_json.is_empty()).then_some(abi_json.as_str());
                match decode_calldata(&data, abi) {
                    Ok(DecodedData::Abi(call)) => {
                        println!("Function: {}", call.function_signature);
                        println!("Selector: {}", call.selector);
                        for arg in &call.args {
                            println!("  {} ({}): {}", arg.name, arg.ty, arg.value);
                        }
                    }
                    Ok(DecodedData::Basic(basic)) => {
                        println!("Selector:   {}", basic.selector);
                        println!("Parameters: {}", basic.parameters_hex);
                        println!("Length:     {} bytes", basic.parameters_length);
                        println!("{}", basic.note);
                    }
                    Err(e) => println!("❌ {e}"),
                }
            }
            "4" => {
                println!();
                for (signature, selector) in COMMON_SELECTORS {
                    println!("  {selector}  {signature}");
                }
            }
            _ => println!("Invalid option"),
        }

        wait_for_enter();
    }
}
