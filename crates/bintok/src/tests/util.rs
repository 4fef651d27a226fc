use crate::TokenReader;

macro_rules! int_token {
    ($name:ident, $ty:ty, $len:expr, $from:ident) => {
        pub(crate) struct $name;

        impl TokenReader for $name {
            type Value = $ty;

            fn len(&self) -> usize {
                $len
            }

            fn get(&self, bytes: &[u8], offset: usize) -> $ty {
                <$ty>::$from(bytes[offset..offset + $len].try_into().unwrap())
            }
        }
    };
}

int_token!(U8, u8, 1, from_le_bytes);
int_token!(U16Le, u16, 2, from_le_bytes);
int_token!(U32Le, u32, 4, from_le_bytes);
int_token!(U32Be, u32, 4, from_be_bytes);
int_token!(U64Le, u64, 8, from_le_bytes);
