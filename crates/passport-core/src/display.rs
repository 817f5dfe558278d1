use crate::types::BlockTransactions;
use crate::Error;

/// Resolves the block parameter for `eth_getBlockByNumber`-style calls.
///
/// Named tags (`latest`, `earliest`, `pending`) pass through unchanged. The
/// `number` tag takes its value from `custom_number`, which may be decimal or
/// 0x-prefixed hex; decimal values are converted to hex.
pub fn block_parameter(param: &str, custom_number: &str) -> Result<String, Error> {
    if param != "number" {
        return Ok(param.to_string());
    }
    if custom_number.is_empty() {
        return Err(Error::MissingBlockNumber);
    }
    if custom_number.starts_with("0x") {
        Ok(custom_number.to_string())
    } else if custom_number.bytes().all(|b| b.is_ascii_digit()) {
        let number: u64 = custom_number
            .parse()
            .map_err(|_| Error::InvalidBlockNumber)?;
        Ok(format!("0x{number:x}"))
    } else {
        Err(Error::InvalidBlockNumber)
    }
}

/// Renders a block's transaction list for display.
pub fn format_transactions(transactions: Option<&BlockTransactions>) -> String {
    let Some(transactions) = transactions else {
        return "No transactions".to_string();
    };
    match transactions {
        BlockTransactions::Hashes(hashes) if hashes.is_empty() => {
            "No transactions in this block".to_string()
        }
        BlockTransactions::Full(txs) if txs.is_empty() => {
            "No transactions in this block".to_string()
        }
        BlockTransactions::Hashes(hashes) => {
            let list: Vec<String> = hashes.iter().map(|hash| format!("  - {hash}")).collect();
            format!("{} transactions\n{}", hashes.len(), list.join("\n"))
        }
        BlockTransactions::Full(txs) => {
            let list: Vec<String> = txs
                .iter()
                .map(|tx| format!("  - Hash: {}", tx.hash))
                .collect();
            format!("{} transactions\n{}", txs.len(), list.join("\n\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockTransaction;

    #[test]
    fn test_block_parameter_named_tags() {
        assert_eq!(block_parameter("latest", "").unwrap(), "latest");
        assert_eq!(block_parameter("earliest", "ignored").unwrap(), "earliest");
        assert_eq!(block_parameter("pending", "").unwrap(), "pending");
    }

    #[test]
    fn test_block_parameter_decimal_to_hex() {
        assert_eq!(block_parameter("number", "0").unwrap(), "0x0");
        assert_eq!(block_parameter("number", "255").unwrap(), "0xff");
        assert_eq!(block_parameter("number", "13473").unwrap(), "0x34a1");
    }

    #[test]
    fn test_block_parameter_hex_passthrough() {
        assert_eq!(block_parameter("number", "0x1b4").unwrap(), "0x1b4");
    }

    #[test]
    fn test_block_parameter_errors() {
        assert!(matches!(
            block_parameter("number", ""),
            Err(Error::MissingBlockNumber)
        ));
        assert!(matches!(
            block_parameter("number", "12ab"),
            Err(Error::InvalidBlockNumber)
        ));
        assert!(matches!(
            block_parameter("number", "-5"),
            Err(Error::InvalidBlockNumber)
        ));
    }

    #[test]
    fn test_format_transactions_empty() {
        assert_eq!(format_transactions(None), "No transactions");
        assert_eq!(
            format_transactions(Some(&BlockTransactions::Hashes(vec![]))),
            "No transactions in this block"
        );
    }

    #[test]
    fn test_format_transactions_hashes() {
        let txs = BlockTransactions::Hashes(vec!["0xaa".to_string(), "0xbb".to_string()]);
        let formatted = format_transactions(Some(&txs));
        assert!(formatted.starts_with("2 transactions\n"));
        assert!(formatted.contains("  - 0xaa"));
        assert!(formatted.contains("  - 0xbb"));
    }

    #[test]
    fn test_format_transactions_full() {
        let txs = BlockTransactions::Full(vec![BlockTransaction {
            hash: "0xdeadbeef".to_string(),
            from: Some("0x1".to_string()),
            to: None,
            value: None,
            gas: None,
        }]);
        let formatted = format_transactions(Some(&txs));
        assert!(formatted.contains("1 transactions"));
        assert!(formatted.contains("  - Hash: 0xdeadbeef"));
    }
}
