use hdwallet_mnemonic::ElectrumV2MnemonicType;

use crate::address_type::AddressType;
use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::result::Result;
use crate::xprivate_key::ExtendedPrivateKey;
use crate::xpublic_key::ExtendedPublicKey;

/// Electrum V2 keystore: a BIP-32 secp256k1 subtree rooted at the node the
/// mnemonic version selects. Standard wallets keep the master key itself as
/// the keystore root, segwit wallets descend to `m/0'`; wallet keys then sit
/// two levels below the root at `change/index`.
pub struct ElectrumV2Keystore {
    root: ExtendedPrivateKey<secp256k1::SecretKey>,
    mnemonic_type: ElectrumV2MnemonicType,
}

impl ElectrumV2Keystore {
    pub fn from_seed(seed: &[u8], mnemonic_type: ElectrumV2MnemonicType) -> Result<Self> {
        let root = ExtendedPrivateKey::new(seed)?.derive_path(&Self::keystore_path(mnemonic_type))?;
        Ok(Self { root, mnemonic_type })
    }

    /// Derivation path from the master key down to the keystore root.
    pub fn keystore_path(mnemonic_type: ElectrumV2MnemonicType) -> DerivationPath {
        let mut path = DerivationPath::default();
        match mnemonic_type {
            ElectrumV2MnemonicType::Standard | ElectrumV2MnemonicType::TwoFactor => {}
            ElectrumV2MnemonicType::Segwit | ElectrumV2MnemonicType::TwoFactorSegwit => {
                path.push(ChildNumber(ChildNumber::HARDENED_FLAG));
            }
        }
        path
    }

    pub fn root(&self) -> &ExtendedPrivateKey<secp256k1::SecretKey> {
        &self.root
    }

    pub fn root_public_key(&self) -> ExtendedPublicKey<secp256k1::PublicKey> {
        self.root.public_key()
    }

    pub fn mnemonic_type(&self) -> ElectrumV2MnemonicType {
        self.mnemonic_type
    }

    /// Wallet key at `root/change/index` where the change level is 0 for
    /// receive addresses and 1 for change addresses.
    pub fn derive(
        &self,
        address_type: AddressType,
        index: u32,
    ) -> Result<ExtendedPrivateKey<secp256k1::SecretKey>> {
        self.root
            .derive_child(ChildNumber::new(address_type.index(), false)?)?
            .derive_child(ChildNumber::new(index, false)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Prefix;
    use faster_hex::hex_decode_fallback;
    use secp256k1::PublicKey;

    macro_rules! hex {
        ($str: expr) => {{
            let len = $str.as_bytes().len() / 2;
            let mut dst = vec![0; len];
            dst.resize(len, 0);
            hex_decode_fallback($str.as_bytes(), &mut dst);
            dst
        }
        [..]};
    }

    const STANDARD_SEED: &str =
        "eedeefce5ffd6550dfbec4d7c43ee9452595a9f5311f4f8a8ad6562fac6c52b7\
         3f60f023768cfb0f2a5db7129a5921940166379069fd973428e7c076b3121788";
    const SEGWIT_SEED: &str =
        "1bfd6bd91cf77369dbda23936b7dc458226068d5d9b92a24dbd9902170e5ef26\
         3231d7fb85b04d88691f8e3f3b41dac2db9143e0df57317610e01ccb8076b9b8";

    #[test]
    fn keystore_paths() {
        assert_eq!(ElectrumV2Keystore::keystore_path(ElectrumV2MnemonicType::Standard).to_string(), "m");
        assert_eq!(ElectrumV2Keystore::keystore_path(ElectrumV2MnemonicType::Segwit).to_string(), "m/0'");
    }

    #[test]
    fn standard_keystore() {
        let keystore =
            ElectrumV2Keystore::from_seed(&hex!(STANDARD_SEED), ElectrumV2MnemonicType::Standard).unwrap();
        assert_eq!(
            keystore.root().to_string(Prefix::XPRV).as_str(),
            "xprv9s21ZrQH143K2U4dYusb4BwDzfHCow5tvF5mU3n9CySBNn74gXmFqJKCH4a49EJ3AqUY6eiGYtPEMKSHhaYtV9jnggiJpLyzwnDEdakTHGM"
        );
        let leaf = keystore.derive(AddressType::Receive, 0).unwrap();
        assert_eq!(
            leaf.private_key().secret_bytes(),
            hex!("3bc2bcad7537a5c1c9bb3e5df261762c4c78b1528e7dac359290b8dfb9d70e8e")
        );
        assert_eq!(
            PublicKey::from_secret_key_global(leaf.private_key()).serialize_uncompressed(),
            hex!(
                "047f91be02884384c7ea2d956a81dd36003fd853f037b10054585432f7639d948\
                 9ef27d6ecf25a9fc8167e04f26ecbb3d30c6239518316d0f81205a3f0cbe3fa75"
            )
        );
    }

    #[test]
    fn segwit_keystore() {
        let keystore =
            ElectrumV2Keystore::from_seed(&hex!(SEGWIT_SEED), ElectrumV2MnemonicType::Segwit).unwrap();
        assert_eq!(
            keystore.root().to_string(Prefix::XPRV).as_str(),
            "xprv9vEoWTRnWyTZwJxZDh4kgmMirSR5wbo8oCBr3sntDtS8vZpx443Qrg8ZHR9QYNdQTqiMGbxLCBVnVDvMyNoWFmvjvPXa9NFn91HACs3WeLQ"
        );
        let leaf = keystore.derive(AddressType::Receive, 0).unwrap();
        assert_eq!(
            leaf.private_key().secret_bytes(),
            hex!("6b6a779086cb6d5234c7ced3c29bb636dfc4148b6be21753864d42a210a1130d")
        );
        assert_eq!(
            PublicKey::from_secret_key_global(leaf.private_key()).serialize_uncompressed(),
            hex!(
                "0495c72f4261252c57c6cdfa2f9894adfae4411d88a78e94927b8f217e82940c0\
                 3c67083cc3014cd16ee609483aad2a23a197f4c2b428372dd35760794f3203b15"
            )
        );
    }

    #[test]
    fn change_chain_is_distinct() {
        let keystore =
            ElectrumV2Keystore::from_seed(&hex!(STANDARD_SEED), ElectrumV2MnemonicType::Standard).unwrap();
        let receive = keystore.derive(AddressType::Receive, 0).unwrap();
        let change = keystore.derive(AddressType::Change, 0).unwrap();
        assert_ne!(receive.private_key(), change.private_key());
    }
}
