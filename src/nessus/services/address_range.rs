use std::net::Ipv4Addr;

/// Largest number of addresses a single target entry may expand to (a /8)
pub const MAX_EXPANSION: u64 = 1 << 24;

/// Inclusive, ascending range of IPv4 addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    first: Ipv4Addr,
    last: Ipv4Addr,
}

impl AddressRange {
    /// Parses `A.B.C.D-E.F.G.H` or `A.B.C.D/N`
    ///
    /// Returns `None` for anything else, including a dash range whose end is
    /// below its start. CIDR blocks keep host addresses only: network and
    /// broadcast are excluded except for /31 (both addresses) and /32 (the
    /// single address). Host bits set in the CIDR address are masked off.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some((first, last)) = raw.split_once('-') {
            let first: Ipv4Addr = first.trim().parse().ok()?;
            let last: Ipv4Addr = last.trim().parse().ok()?;
            return (first <= last).then_some(Self { first, last });
        }

        let (address, prefix) = raw.split_once('/')?;
        let address: Ipv4Addr = address.trim().parse().ok()?;
        let prefix: u8 = prefix.trim().parse().ok()?;
        Self::from_cidr(address, prefix)
    }

    fn from_cidr(address: Ipv4Addr, prefix: u8) -> Option<Self> {
        if prefix > 32 {
            return None;
        }
        let mask = if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - prefix)
        };
        let network = u32::from(address) & mask;
        let broadcast = network | !mask;

        let (first, last) = match prefix {
            31 | 32 => (network, broadcast),
            _ => (network + 1, broadcast - 1),
        };
        Some(Self {
            first: Ipv4Addr::from(first),
            last: Ipv4Addr::from(last),
        })
    }

    pub fn first(&self) -> Ipv4Addr {
        self.first
    }

    pub fn last(&self) -> Ipv4Addr {
        self.last
    }

    pub fn len(&self) -> u64 {
        u64::from(u32::from(self.last)) - u64::from(u32::from(self.first)) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        (u32::from(self.first)..=u32::from(self.last)).map(Ipv4Addr::from)
    }
}

/// Expands a dash range or CIDR block into its addresses
///
/// Unrecognised input, and ranges larger than `MAX_EXPANSION`, yield an empty
/// list rather than an error.
pub fn expand(raw: &str) -> Vec<Ipv4Addr> {
    match AddressRange::parse(raw) {
        Some(range) if range.len() <= MAX_EXPANSION => range.iter().collect(),
        _ => Vec::new(),
    }
}

/// True if the entry has the shape of a dash range or CIDR block,
/// whether or not it expands to anything
pub fn looks_like_range(raw: &str) -> bool {
    let raw = raw.trim();
    let is_address = |part: &str| {
        let octets: Vec<&str> = part.split('.').collect();
        octets.len() == 4
            && octets
                .iter()
                .all(|octet| (1..=3).contains(&octet.len()) && octet.bytes().all(|b| b.is_ascii_digit()))
    };

    if let Some((first, last)) = raw.split_once('-') {
        return is_address(first) && is_address(last);
    }
    if let Some((address, prefix)) = raw.split_once('/') {
        return is_address(address)
            && (1..=2).contains(&prefix.len())
            && prefix.bytes().all(|b| b.is_ascii_digit());
    }
    false
}
